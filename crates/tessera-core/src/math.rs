//! Overflow-safe size arithmetic.

/// Multiply two unsigned 32-bit magnitudes, reporting overflow.
///
/// The true product is computed in a 64-bit widening intermediate and
/// checked against the 32-bit range, so overflow is detected from the
/// mathematical result rather than inferred from a wrapped value. Returns
/// `None` on overflow.
///
/// # Examples
///
/// ```
/// use tessera_core::mul_wide;
///
/// assert_eq!(mul_wide(6, 7), Some(42));
/// assert_eq!(mul_wide(u32::MAX, 1), Some(u32::MAX));
/// assert_eq!(mul_wide(u32::MAX, 2), None);
/// assert_eq!(mul_wide(65_536, 65_536), None);
/// ```
pub fn mul_wide(a: u32, b: u32) -> Option<u32> {
    let product = u64::from(a) * u64::from(b);
    if product > u64::from(u32::MAX) {
        None
    } else {
        Some(product as u32)
    }
}
