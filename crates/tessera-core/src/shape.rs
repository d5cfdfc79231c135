//! Shape validation and size computation.

use smallvec::SmallVec;

use crate::dtype::DataType;
use crate::error::CreateError;
use crate::math::mul_wide;

/// An array shape: one extent per axis, in axis order.
///
/// Uses `SmallVec<[u32; 4]>` to avoid heap allocation for arrays up to
/// 4 axes; deeper shapes spill to the heap transparently.
pub type Shape = SmallVec<[u32; 4]>;

/// Validate a shape against an element type and compute its sizes.
///
/// Returns `(element_count, byte_size)`. The checks run in a fixed order,
/// which is part of the contract: it determines which error is reported
/// when an input violates several constraints at once.
///
/// 1. Empty shape → [`CreateError::EmptyShape`].
/// 2. Zero-width element type → [`CreateError::InvalidDataType`].
/// 3. Left-to-right fold over the extents: a zero extent →
///    [`CreateError::DegenerateShape`] for the first offending axis;
///    a product outside the 32-bit range → [`CreateError::LengthOverflow`].
/// 4. `count × width` outside the 32-bit range →
///    [`CreateError::SizeOverflow`].
///
/// # Examples
///
/// ```
/// use tessera_core::{checked_size, CreateError, DataType};
///
/// assert_eq!(checked_size(&[3, 4], DataType::F32), Ok((12, 48)));
/// assert_eq!(checked_size(&[], DataType::F32), Err(CreateError::EmptyShape));
/// assert_eq!(
///     checked_size(&[2, 0, 3], DataType::F32),
///     Err(CreateError::DegenerateShape)
/// );
/// ```
pub fn checked_size(shape: &[u32], dtype: DataType) -> Result<(u32, u32), CreateError> {
    if shape.is_empty() {
        return Err(CreateError::EmptyShape);
    }
    let width = dtype.size_of();
    if width == 0 {
        return Err(CreateError::InvalidDataType);
    }
    let mut count: u32 = 1;
    for &extent in shape {
        if extent < 1 {
            return Err(CreateError::DegenerateShape);
        }
        count = mul_wide(count, extent).ok_or(CreateError::LengthOverflow)?;
    }
    let size = mul_wide(count, width).ok_or(CreateError::SizeOverflow)?;
    Ok((count, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_shape_reported_before_datatype() {
        // Both constraints violated; the shape check runs first.
        assert_eq!(
            checked_size(&[], DataType::Invalid),
            Err(CreateError::EmptyShape)
        );
    }

    #[test]
    fn invalid_datatype_reported_before_extents() {
        assert_eq!(
            checked_size(&[0, 5], DataType::I64),
            Err(CreateError::InvalidDataType)
        );
    }

    #[test]
    fn degenerate_axis_wins_over_later_overflow() {
        // The zero extent comes first; the fold never reaches the
        // would-overflow extents.
        assert_eq!(
            checked_size(&[0, u32::MAX, u32::MAX], DataType::U8),
            Err(CreateError::DegenerateShape)
        );
    }

    #[test]
    fn overflow_wins_over_later_degenerate_axis() {
        assert_eq!(
            checked_size(&[u32::MAX, u32::MAX, 0], DataType::U8),
            Err(CreateError::LengthOverflow)
        );
    }

    #[test]
    fn length_overflow_detected_in_fold() {
        assert_eq!(
            checked_size(&[1 << 16, 1 << 16], DataType::U8),
            Err(CreateError::LengthOverflow)
        );
    }

    #[test]
    fn size_overflow_when_count_fits_but_bytes_do_not() {
        // 2^30 elements fit in u32; 2^30 * 8 bytes do not.
        assert_eq!(
            checked_size(&[1 << 15, 1 << 15], DataType::F64),
            Err(CreateError::SizeOverflow)
        );
    }

    #[test]
    fn valid_shape_returns_count_and_bytes() {
        assert_eq!(checked_size(&[2, 3, 4], DataType::I16), Ok((24, 48)));
        assert_eq!(checked_size(&[7], DataType::F64), Ok((7, 56)));
    }

    fn arb_extents() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..=u32::MAX, 1..8)
    }

    proptest! {
        #[test]
        fn zero_extent_always_degenerate_unless_preceded_by_overflow(
            extents in arb_extents(),
            zero_at in 0usize..8,
        ) {
            let mut shape = extents;
            let idx = zero_at.min(shape.len() - 1);
            shape[idx] = 0;
            // Ground truth via u64: does the prefix before the zero overflow?
            let mut acc: u64 = 1;
            let mut expect = CreateError::DegenerateShape;
            for &e in &shape {
                if e == 0 {
                    break;
                }
                acc *= u64::from(e);
                if acc > u64::from(u32::MAX) {
                    expect = CreateError::LengthOverflow;
                    break;
                }
                // Clamp so the next multiply cannot exceed u64.
                acc = acc.min(u64::from(u32::MAX));
            }
            prop_assert_eq!(checked_size(&shape, DataType::U8), Err(expect));
        }

        #[test]
        fn count_matches_wide_product(extents in prop::collection::vec(1u32..64, 1..5)) {
            let truth: u64 = extents.iter().map(|&e| u64::from(e)).product();
            let (count, size) = checked_size(&extents, DataType::F32).unwrap();
            prop_assert_eq!(u64::from(count), truth);
            prop_assert_eq!(size, count * 4);
        }

        #[test]
        fn never_reports_wrapped_count(extents in arb_extents()) {
            if let Ok((count, _)) = checked_size(&extents, DataType::U8) {
                let truth: u64 = extents.iter().map(|&e| u64::from(e)).product();
                prop_assert_eq!(u64::from(count), truth);
            }
        }
    }
}
