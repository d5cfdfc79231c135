//! Creation policies for the Tessera N-dimensional array engine.
//!
//! Three policies share a pipeline — validate the shape, allocate the
//! buffer, fill it, register the result — and differ only in the fill and
//! in argument-specific checks:
//!
//! - [`create_zeroed`]: every byte set to zero.
//! - [`create_from_bytes`]: byte-for-byte copy of a source buffer whose
//!   length must match the computed size exactly.
//! - [`linspace`]: evenly spaced floating-point samples over an open or
//!   closed interval, 1-D only.
//!
//! Every failure happens before allocation; the fill itself cannot fail,
//! and the registry sees the array only after the fill completes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod create;
pub mod fill;
pub mod wire;

pub use create::{create_from_bytes, create_zeroed, linspace};
pub use fill::LinearFill;
pub use wire::decode_shape;
