//! Per-type linear fill dispatch.

use tessera_core::DataType;

/// The closed set of element types that support linear-space fill.
///
/// Dispatch is an explicit enum match; unsupported types are a `None`
/// from [`LinearFill::for_dtype`], surfaced by the policy as
/// `InvalidDataType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinearFill {
    /// Fill 8-byte f64 elements.
    F64,
    /// Fill 4-byte f32 elements.
    F32,
}

impl LinearFill {
    /// Look up the fill strategy for an element type.
    pub fn for_dtype(dtype: DataType) -> Option<Self> {
        match dtype {
            DataType::F64 => Some(Self::F64),
            DataType::F32 => Some(Self::F32),
            _ => None,
        }
    }

    /// Write `samples` evenly spaced values into `out`.
    ///
    /// Element `i` is `start + step * i`. The f32 path narrows `start` and
    /// `step` to f32 once, before the per-element multiply-add, so the
    /// narrowing rounding error repeats identically at every index. This
    /// ordering is bit-observable downstream and must not be replaced by a
    /// compute-wide-then-narrow scheme.
    ///
    /// `out` must be exactly `samples × width` bytes; elements are written
    /// in the platform's native byte order, matching in-memory layout.
    pub fn fill(self, samples: i32, start: f64, step: f64, out: &mut [u8]) {
        match self {
            Self::F64 => {
                debug_assert_eq!(out.len(), samples as usize * 8);
                for (i, cell) in out.chunks_exact_mut(8).enumerate() {
                    let value = start + step * i as f64;
                    cell.copy_from_slice(&value.to_ne_bytes());
                }
            }
            Self::F32 => {
                debug_assert_eq!(out.len(), samples as usize * 4);
                let start = start as f32;
                let step = step as f32;
                for (i, cell) in out.chunks_exact_mut(4).enumerate() {
                    let value = start + step * i as f32;
                    cell.copy_from_slice(&value.to_ne_bytes());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f64_at(bytes: &[u8], i: usize) -> f64 {
        f64::from_ne_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap())
    }

    fn f32_at(bytes: &[u8], i: usize) -> f32 {
        f32::from_ne_bytes(bytes[i * 4..i * 4 + 4].try_into().unwrap())
    }

    #[test]
    fn lookup_covers_exactly_the_float_types() {
        assert_eq!(LinearFill::for_dtype(DataType::F64), Some(LinearFill::F64));
        assert_eq!(LinearFill::for_dtype(DataType::F32), Some(LinearFill::F32));
        assert_eq!(LinearFill::for_dtype(DataType::I32), None);
        assert_eq!(LinearFill::for_dtype(DataType::U8), None);
        assert_eq!(LinearFill::for_dtype(DataType::Invalid), None);
    }

    #[test]
    fn f64_fill_writes_every_element() {
        let mut out = vec![0xAAu8; 4 * 8];
        LinearFill::F64.fill(4, 1.0, 0.5, &mut out);
        for (i, expect) in [1.0, 1.5, 2.0, 2.5].into_iter().enumerate() {
            assert_eq!(f64_at(&out, i), expect);
        }
    }

    #[test]
    fn f32_fill_narrows_before_multiply() {
        // 0.1 is inexact in both widths; the contract is that every element
        // equals start_f32 + step_f32 * i, not (start + step * i) as f32.
        let start = 0.1f64;
        let step = 0.1f64;
        let mut out = vec![0u8; 8 * 4];
        LinearFill::F32.fill(8, start, step, &mut out);
        let start_f32 = start as f32;
        let step_f32 = step as f32;
        for i in 0..8 {
            let expect = start_f32 + step_f32 * i as f32;
            assert_eq!(f32_at(&out, i).to_bits(), expect.to_bits(), "index {i}");
        }
    }

    #[test]
    fn f32_narrowed_path_differs_from_wide_path_where_rounding_diverges() {
        // Pick values where the two orderings produce different bit
        // patterns, to pin the narrowed ordering.
        let start = 0.1f64;
        let step = 1e-3f64;
        let samples = 1000;
        let mut out = vec![0u8; samples * 4];
        LinearFill::F32.fill(samples as i32, start, step, &mut out);
        let mut diverged = false;
        for i in 0..samples {
            let wide = (start + step * i as f64) as f32;
            if f32_at(&out, i).to_bits() != wide.to_bits() {
                diverged = true;
                break;
            }
        }
        assert!(diverged, "narrowed fill unexpectedly matched the wide path");
    }

    #[test]
    fn single_sample_writes_start() {
        let mut out = vec![0u8; 8];
        LinearFill::F64.fill(1, 3.25, 99.0, &mut out);
        assert_eq!(f64_at(&out, 0), 3.25);
    }
}
