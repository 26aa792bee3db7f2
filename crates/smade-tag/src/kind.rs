//! The closed set of payload kind codes shared by both codec directions.

use std::fmt;

use crate::error::CodecError;

/// Payload kind code, as written in the low bits of a tag's type byte.
///
/// The same enum drives both decode and encode so the two directions
/// cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagKind {
    /// No payload. Only the sentinel tag carries it.
    Empty = 0,
    /// Signed 8-bit integer.
    Byte = 1,
    /// Signed 16-bit integer.
    Short = 2,
    /// Signed 32-bit integer.
    Int = 3,
    /// Signed 64-bit integer.
    Long = 4,
    /// 32-bit float.
    Float = 5,
    /// 64-bit float.
    Double = 6,
    /// `u16`-prefixed raw bytes.
    ByteArray = 7,
    /// `u16`-prefixed ASCII text.
    String = 8,
    /// Three 32-bit floats.
    FloatVec3 = 9,
    /// Three signed 32-bit integers.
    IntVec3 = 10,
    /// Three signed 8-bit integers.
    ByteVec3 = 11,
    /// Homogeneous list with an explicit count.
    List = 12,
    /// Sentinel-terminated sequence of tags.
    Struct = 13,
    /// Single registration byte.
    Registration = 14,
    /// Four 32-bit floats.
    FloatVec4 = 15,
}

impl TagKind {
    /// Every kind, in code order.
    pub const ALL: [TagKind; 16] = [
        TagKind::Empty,
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::FloatVec3,
        TagKind::IntVec3,
        TagKind::ByteVec3,
        TagKind::List,
        TagKind::Struct,
        TagKind::Registration,
        TagKind::FloatVec4,
    ];

    /// Map a wire code to its kind.
    ///
    /// Returns [`CodecError::UnsupportedPayloadKind`] for anything
    /// outside `0..=15`.
    pub fn from_code(code: u8) -> Result<Self, CodecError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(CodecError::UnsupportedPayloadKind { kind: code })
    }

    /// The wire code of this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::ByteArray => "byte array",
            Self::String => "string",
            Self::FloatVec3 => "float vec3",
            Self::IntVec3 => "int vec3",
            Self::ByteVec3 => "byte vec3",
            Self::List => "list",
            Self::Struct => "struct",
            Self::Registration => "registration",
            Self::FloatVec4 => "float vec4",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TagKind {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
