//! The array object: descriptor plus exclusively owned byte buffer.

use tessera_core::{CreateError, DataType, Shape};

/// An N-dimensional typed array.
///
/// Owns a contiguous byte buffer of exactly `len × dtype.size_of()` bytes.
/// Arrays are created fully initialized or not at all: [`NdArray::allocate`]
/// is only reachable through a creation policy, which validates the shape
/// first and writes every byte before the array escapes.
///
/// # Examples
///
/// ```
/// use smallvec::smallvec;
/// use tessera_core::{checked_size, DataType};
/// use tessera_store::NdArray;
///
/// let (count, bytes) = checked_size(&[2, 3], DataType::F32).unwrap();
/// let array = NdArray::allocate(smallvec![2, 3], count, bytes, DataType::F32).unwrap();
/// assert_eq!(array.ndim(), 2);
/// assert_eq!(array.len(), 6);
/// assert_eq!(array.byte_len(), 24);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NdArray {
    shape: Shape,
    dtype: DataType,
    len: u32,
    data: Vec<u8>,
}

impl NdArray {
    /// Allocate an array with the given descriptor and a buffer of exactly
    /// `byte_size` bytes.
    ///
    /// `len` and `byte_size` must come from
    /// [`checked_size`](tessera_core::checked_size); this constructor trusts
    /// them and performs no re-validation. Allocation is fallible: a refused
    /// reservation reports [`CreateError::OutOfMemory`] instead of aborting.
    ///
    /// The buffer comes back zero-filled (safe Rust has no uninitialized
    /// storage); callers still write every byte, so nothing downstream
    /// depends on it.
    pub fn allocate(
        shape: Shape,
        len: u32,
        byte_size: u32,
        dtype: DataType,
    ) -> Result<Self, CreateError> {
        debug_assert!(!shape.is_empty());
        debug_assert_eq!(byte_size, len * dtype.size_of());

        let mut data = Vec::new();
        data.try_reserve_exact(byte_size as usize)
            .map_err(|_| CreateError::OutOfMemory)?;
        data.resize(byte_size as usize, 0);

        Ok(Self {
            shape,
            dtype,
            len,
            data,
        })
    }

    /// The extents, one per axis, in axis order.
    pub fn shape(&self) -> &[u32] {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> u32 {
        self.shape.len() as u32
    }

    /// The element type.
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    /// Total number of elements (the product of the extents).
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always `false`: validation rejects degenerate and empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Buffer size in bytes.
    pub fn byte_len(&self) -> u32 {
        self.data.len() as u32
    }

    /// The buffer's raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the buffer's raw bytes.
    ///
    /// No bounds discipline beyond the slice length is enforced here;
    /// fills must respect the computed size.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use tessera_core::checked_size;

    fn alloc(shape: &[u32], dtype: DataType) -> NdArray {
        let (count, bytes) = checked_size(shape, dtype).unwrap();
        NdArray::allocate(Shape::from_slice(shape), count, bytes, dtype).unwrap()
    }

    #[test]
    fn descriptor_matches_request() {
        let array = alloc(&[4, 5, 6], DataType::I16);
        assert_eq!(array.shape(), &[4, 5, 6]);
        assert_eq!(array.ndim(), 3);
        assert_eq!(array.dtype(), DataType::I16);
        assert_eq!(array.len(), 120);
        assert_eq!(array.byte_len(), 240);
    }

    #[test]
    fn buffer_is_zeroed_on_allocation() {
        let array = alloc(&[16], DataType::F64);
        assert!(array.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn bytes_mut_writes_are_visible() {
        let mut array = alloc(&[3], DataType::U8);
        array.bytes_mut().copy_from_slice(&[1, 2, 3]);
        assert_eq!(array.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn single_axis_shape_stays_inline() {
        let array = NdArray::allocate(smallvec![7], 7, 7, DataType::U8).unwrap();
        assert_eq!(array.shape(), &[7]);
        assert_eq!(array.byte_len(), 7);
    }
}
