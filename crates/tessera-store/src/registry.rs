//! The handle registry seam.
//!
//! Creation policies hand a finished array to an [`ArrayRegistry`] exactly
//! once per successful call, moving ownership into the registry. Error
//! paths never reach the registry, so "no registration on failure" holds
//! by construction rather than by convention.

use indexmap::IndexMap;
use tessera_core::ArrayHandle;

use crate::array::NdArray;

/// Associates caller-chosen handles with finished arrays.
///
/// The registry's concurrency discipline is its owner's concern; the
/// engine only requires that `register` take ownership of the array.
pub trait ArrayRegistry {
    /// Register a fully-formed array under `handle`, taking ownership.
    ///
    /// Re-registering a live handle replaces the previous array, which is
    /// dropped.
    fn register(&mut self, handle: ArrayHandle, array: NdArray);
}

/// An insertion-ordered in-process registry.
///
/// Suitable for embedding and tests; hosts with their own identity table
/// implement [`ArrayRegistry`] over it instead.
///
/// # Examples
///
/// ```
/// use smallvec::smallvec;
/// use tessera_core::{checked_size, ArrayHandle, DataType};
/// use tessera_store::{ArrayRegistry, HandleMap, NdArray};
///
/// let (count, bytes) = checked_size(&[2, 2], DataType::F32).unwrap();
/// let array = NdArray::allocate(smallvec![2, 2], count, bytes, DataType::F32).unwrap();
///
/// let mut registry = HandleMap::new();
/// registry.register(ArrayHandle(1), array);
/// assert_eq!(registry.get(ArrayHandle(1)).unwrap().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct HandleMap {
    arrays: IndexMap<ArrayHandle, NdArray>,
}

impl HandleMap {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            arrays: IndexMap::new(),
        }
    }

    /// Look up the array behind a handle.
    pub fn get(&self, handle: ArrayHandle) -> Option<&NdArray> {
        self.arrays.get(&handle)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, handle: ArrayHandle) -> Option<&mut NdArray> {
        self.arrays.get_mut(&handle)
    }

    /// Remove the array behind a handle and return it.
    ///
    /// Returns `None` if the handle was never registered or was already
    /// released.
    pub fn release(&mut self, handle: ArrayHandle) -> Option<NdArray> {
        self.arrays.shift_remove(&handle)
    }

    /// Number of live arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether the registry holds no arrays.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl ArrayRegistry for HandleMap {
    fn register(&mut self, handle: ArrayHandle, array: NdArray) {
        self.arrays.insert(handle, array);
    }
}
