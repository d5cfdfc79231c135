//! Decoding of the wire representation of shapes.

use tessera_core::Shape;

/// Decode a raw shape buffer into extents.
///
/// The protocol encodes a shape as consecutive little-endian 32-bit
/// extents, in axis order. The decoding layer guarantees the buffer length
/// is a multiple of 4; a trailing remainder is truncated, matching the
/// protocol's `size / 4` extent count. Domain validation (no empty shape,
/// no zero extent) is the size computer's job, not this decoder's.
///
/// # Examples
///
/// ```
/// use tessera_create::decode_shape;
///
/// let raw = [3u8, 0, 0, 0, 4, 0, 0, 0];
/// let shape = decode_shape(&raw);
/// assert_eq!(&shape[..], &[3, 4]);
/// assert!(decode_shape(&[]).is_empty());
/// ```
pub fn decode_shape(raw: &[u8]) -> Shape {
    raw.chunks_exact(4)
        .map(|group| u32::from_le_bytes([group[0], group[1], group[2], group[3]]))
        .collect()
}
