//! Core types for the Tessera N-dimensional array engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the datatype registry, the creation error taxonomy, overflow-safe
//! size arithmetic, and the shape validator that every creation policy
//! runs before touching memory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dtype;
pub mod error;
pub mod id;
pub mod math;
pub mod shape;

pub use dtype::DataType;
pub use error::CreateError;
pub use id::ArrayHandle;
pub use math::mul_wide;
pub use shape::{checked_size, Shape};
