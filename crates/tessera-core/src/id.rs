//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an array to external callers, independent of its memory
/// location.
///
/// Handles are chosen by the caller (the protocol carries them as signed
/// 32-bit integers) and passed to a creation policy, which registers the
/// finished array under the handle on success. The engine never allocates
/// handles itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayHandle(pub i32);

impl fmt::Display for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ArrayHandle {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
