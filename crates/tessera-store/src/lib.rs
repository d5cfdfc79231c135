//! Array storage for the Tessera N-dimensional array engine.
//!
//! [`NdArray`] owns an array's descriptor and its contiguous byte buffer;
//! [`ArrayRegistry`] is the seam to the identity registry that associates
//! finished arrays with caller-chosen handles. Creation policies live in
//! `tessera-create`; this crate only allocates and exposes storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod registry;

pub use array::NdArray;
pub use registry::{ArrayRegistry, HandleMap};
