//! The closed set of element types an array can store.

use std::fmt;

/// Element-type tag for array storage.
///
/// The set is closed: every tag the wire protocol can carry is listed here,
/// including the reserved 64-bit integer tags (which the protocol names but
/// storage does not yet support) and an explicit [`DataType::Invalid`]
/// sentinel that fails every lookup. Width lookups return `0` for
/// unsupported tags rather than panicking, so validation can surface
/// `InvalidDataType` as an ordinary error.
///
/// # Examples
///
/// ```
/// use tessera_core::DataType;
///
/// assert_eq!(DataType::F64.size_of(), 8);
/// assert_eq!(DataType::U8.size_of(), 1);
/// assert_eq!(DataType::I64.size_of(), 0); // reserved, unsupported
/// assert_eq!(DataType::Invalid.size_of(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 64-bit IEEE-754 floating point.
    F64,
    /// 32-bit IEEE-754 floating point.
    F32,
    /// Signed 64-bit integer. Reserved in the protocol; storage width is 0.
    I64,
    /// Unsigned 64-bit integer. Reserved in the protocol; storage width is 0.
    U64,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Sentinel for tags outside the protocol set. Fails every lookup.
    Invalid,
}

impl DataType {
    /// Byte width of one scalar of this type, or `0` if the tag is not
    /// supported for storage (`I64`, `U64`, `Invalid`).
    pub fn size_of(self) -> u32 {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
            Self::I32 | Self::U32 => 4,
            Self::I16 | Self::U16 => 2,
            Self::I8 | Self::U8 => 1,
            Self::I64 | Self::U64 | Self::Invalid => 0,
        }
    }

    /// Whether linear-space initialization is defined for this type.
    ///
    /// Only the two floating-point kinds have a linear fill; integer tags
    /// are valid for plain creation but not for linspace.
    pub fn supports_linspace(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Decode a wire tag into a datatype.
    ///
    /// Unknown tags map to [`DataType::Invalid`] and are rejected later by
    /// width lookup, keeping the decode leg infallible.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            0 => Self::F64,
            1 => Self::F32,
            2 => Self::I64,
            3 => Self::U64,
            4 => Self::I32,
            5 => Self::U32,
            6 => Self::I16,
            7 => Self::U16,
            8 => Self::I8,
            9 => Self::U8,
            _ => Self::Invalid,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}
