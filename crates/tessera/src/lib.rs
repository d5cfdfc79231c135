//! Tessera: an N-dimensional typed array allocation and initialization
//! engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessera sub-crates. Given a requested shape and element type, the
//! engine validates the shape, computes element count and byte size with
//! overflow detection, allocates a buffer, fills it under one of three
//! policies (zeroed, from-bytes, linspace), and registers the finished
//! array under a caller-chosen handle.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut registry = HandleMap::new();
//!
//! // A zeroed 3×4 array of 16-bit integers.
//! create_zeroed(ArrayHandle(1), &[3, 4], DataType::I16, &mut registry).unwrap();
//! let array = registry.get(ArrayHandle(1)).unwrap();
//! assert_eq!(array.len(), 12);
//! assert!(array.bytes().iter().all(|&b| b == 0));
//!
//! // Five samples over the closed interval [0, 1].
//! linspace(ArrayHandle(2), 0.0, 1.0, 5, true, DataType::F64, &mut registry).unwrap();
//! let samples: Vec<f64> = registry
//!     .get(ArrayHandle(2))
//!     .unwrap()
//!     .bytes()
//!     .chunks_exact(8)
//!     .map(|c| f64::from_ne_bytes(c.try_into().unwrap()))
//!     .collect();
//! assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! // Malformed requests are ordinary errors, never registrations.
//! let err = create_zeroed(ArrayHandle(3), &[2, 0], DataType::F32, &mut registry);
//! assert_eq!(err, Err(CreateError::DegenerateShape));
//! assert!(registry.get(ArrayHandle(3)).is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Datatypes, errors, shape sizing, handles |
//! | [`store`] | `tessera-store` | `NdArray` storage, registry seam |
//! | [`create`] | `tessera-create` | Creation policies, linear fill, wire decoding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tessera_core as types;
pub use tessera_create as create;
pub use tessera_store as store;

pub use tessera_core::{checked_size, mul_wide, ArrayHandle, CreateError, DataType, Shape};
pub use tessera_create::{create_from_bytes, create_zeroed, decode_shape, linspace, LinearFill};
pub use tessera_store::{ArrayRegistry, HandleMap, NdArray};

/// Commonly used items, importable with `use tessera::prelude::*;`.
pub mod prelude {
    pub use tessera_core::{ArrayHandle, CreateError, DataType, Shape};
    pub use tessera_create::{create_from_bytes, create_zeroed, decode_shape, linspace};
    pub use tessera_store::{ArrayRegistry, HandleMap, NdArray};
}
