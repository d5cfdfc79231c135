//! The creation error taxonomy.

use std::error::Error;
use std::fmt;

/// Errors from array creation and initialization.
///
/// Variants are mutually exclusive: validation fails fast, so the first
/// violated precondition determines which error is reported. All of these
/// are ordinary outcomes of malformed input, never process-fatal; the
/// dispatch layer owns any user-visible reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateError {
    /// The shape sequence has no axes.
    EmptyShape,
    /// The element type is unsupported for this operation.
    InvalidDataType,
    /// An axis extent is zero (degenerate axis).
    DegenerateShape,
    /// The element-count product exceeds the 32-bit range.
    LengthOverflow,
    /// The byte size (count × width) exceeds the 32-bit range.
    SizeOverflow,
    /// Buffer allocation failed.
    OutOfMemory,
    /// The supplied source buffer's length does not match the computed
    /// byte size (from-bytes creation only).
    IncompatibleBufferSize,
    /// The sample count is not valid for a linear-space request.
    InvalidLength,
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "shape has no axes"),
            Self::InvalidDataType => write!(f, "unsupported element type"),
            Self::DegenerateShape => write!(f, "shape has a zero-length axis"),
            Self::LengthOverflow => write!(f, "element count overflows 32 bits"),
            Self::SizeOverflow => write!(f, "byte size overflows 32 bits"),
            Self::OutOfMemory => write!(f, "buffer allocation failed"),
            Self::IncompatibleBufferSize => {
                write!(f, "source buffer length does not match computed size")
            }
            Self::InvalidLength => write!(f, "invalid sample count"),
        }
    }
}

impl Error for CreateError {}
