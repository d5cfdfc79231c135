//! The three creation policies.
//!
//! Each policy is a single synchronous computation: validate, allocate,
//! fill, register. Failures are all reported before allocation, the fill
//! cannot fail, and the registry receives the array exactly once — after
//! the fill — so a part-initialized array is never observable.

use smallvec::smallvec;
use tessera_core::{checked_size, ArrayHandle, CreateError, DataType, Shape};
use tessera_store::{ArrayRegistry, NdArray};

use crate::fill::LinearFill;

/// Create an array of the given shape and element type with every byte
/// set to zero, and register it under `out`.
///
/// # Examples
///
/// ```
/// use tessera_core::{ArrayHandle, DataType};
/// use tessera_create::create_zeroed;
/// use tessera_store::HandleMap;
///
/// let mut registry = HandleMap::new();
/// create_zeroed(ArrayHandle(1), &[3, 4], DataType::I16, &mut registry).unwrap();
/// let array = registry.get(ArrayHandle(1)).unwrap();
/// assert_eq!(array.len(), 12);
/// assert!(array.bytes().iter().all(|&b| b == 0));
/// ```
pub fn create_zeroed(
    out: ArrayHandle,
    shape: &[u32],
    dtype: DataType,
    registry: &mut dyn ArrayRegistry,
) -> Result<(), CreateError> {
    let (count, byte_size) = checked_size(shape, dtype)?;
    let mut array = NdArray::allocate(Shape::from_slice(shape), count, byte_size, dtype)?;
    array.bytes_mut().fill(0);
    registry.register(out, array);
    Ok(())
}

/// Create an array by copying `src` verbatim into its buffer, and register
/// it under `out`.
///
/// `src.len()` must equal the computed byte size exactly; any mismatch is
/// [`CreateError::IncompatibleBufferSize`], reported before allocation.
pub fn create_from_bytes(
    out: ArrayHandle,
    shape: &[u32],
    dtype: DataType,
    src: &[u8],
    registry: &mut dyn ArrayRegistry,
) -> Result<(), CreateError> {
    let (count, byte_size) = checked_size(shape, dtype)?;
    if src.len() != byte_size as usize {
        return Err(CreateError::IncompatibleBufferSize);
    }
    let mut array = NdArray::allocate(Shape::from_slice(shape), count, byte_size, dtype)?;
    array.bytes_mut().copy_from_slice(src);
    registry.register(out, array);
    Ok(())
}

/// Create a 1-D array of `samples` evenly spaced values from `start`
/// toward `stop`, and register it under `out`.
///
/// With `closed` set, the last sample equals `stop` (which needs at least
/// two samples); otherwise the interval is open and `stop` is never
/// reached. Only [`DataType::F64`] and [`DataType::F32`] are supported;
/// the step is always computed in f64, and the f32 path narrows `start`
/// and the step once before filling (see [`LinearFill::fill`]).
///
/// # Examples
///
/// ```
/// use tessera_core::{ArrayHandle, DataType};
/// use tessera_create::linspace;
/// use tessera_store::HandleMap;
///
/// let mut registry = HandleMap::new();
/// linspace(ArrayHandle(1), 0.0, 1.0, 5, true, DataType::F64, &mut registry).unwrap();
/// let array = registry.get(ArrayHandle(1)).unwrap();
/// assert_eq!(array.shape(), &[5]);
/// let last = f64::from_ne_bytes(array.bytes()[32..40].try_into().unwrap());
/// assert_eq!(last, 1.0);
/// ```
pub fn linspace(
    out: ArrayHandle,
    start: f64,
    stop: f64,
    samples: i32,
    closed: bool,
    dtype: DataType,
    registry: &mut dyn ArrayRegistry,
) -> Result<(), CreateError> {
    if samples <= 0 {
        return Err(CreateError::InvalidLength);
    }
    // A closed interval needs two distinct endpoints.
    if closed && samples == 1 {
        return Err(CreateError::InvalidLength);
    }
    let fill = LinearFill::for_dtype(dtype).ok_or(CreateError::InvalidDataType)?;

    let shape: Shape = smallvec![samples as u32];
    let (count, byte_size) = checked_size(&shape, dtype)?;
    let mut array = NdArray::allocate(shape, count, byte_size, dtype)?;

    let range = stop - start;
    let step = range / f64::from(if closed { samples - 1 } else { samples });
    fill.fill(samples, start, step, array.bytes_mut());

    registry.register(out, array);
    Ok(())
}
