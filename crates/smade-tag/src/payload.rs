//! The sixteen payload kinds and their wire codecs.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::kind::TagKind;
use crate::list::TagList;
use crate::stream::ByteStream;
use crate::tag::TagStruct;

/// A typed value, one variant per [`TagKind`].
///
/// The variant fixes the kind, so a payload whose stored shape disagrees
/// with its kind cannot be built.
///
/// | kind | variant | wire shape |
/// |---|---|---|
/// | 0 | [`Empty`](Payload::Empty) | nothing |
/// | 1-6 | scalars | 1/2/4/8 bytes BE |
/// | 7, 8 | [`ByteArray`](Payload::ByteArray), [`String`](Payload::String) | `u16` length + bytes |
/// | 9, 10, 11, 15 | fixed vectors | 3 or 4 elements, no prefix |
/// | 12 | [`List`](Payload::List) | see [`TagList`] |
/// | 13 | [`Struct`](Payload::Struct) | see [`TagStruct`] |
/// | 14 | [`Registration`](Payload::Registration) | 1 byte |
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// No value (kind 0).
    Empty,
    /// Kind 1.
    Byte(i8),
    /// Kind 2.
    Short(i16),
    /// Kind 3.
    Int(i32),
    /// Kind 4.
    Long(i64),
    /// Kind 5.
    Float(f32),
    /// Kind 6.
    Double(f64),
    /// Kind 7.
    ByteArray(Vec<u8>),
    /// Kind 8. ASCII only.
    String(String),
    /// Kind 9.
    FloatVec3([f32; 3]),
    /// Kind 10.
    IntVec3([i32; 3]),
    /// Kind 11.
    ByteVec3([i8; 3]),
    /// Kind 12.
    List(TagList),
    /// Kind 13.
    Struct(TagStruct),
    /// Kind 14.
    Registration(u8),
    /// Kind 15.
    FloatVec4([f32; 4]),
}

impl Payload {
    /// The kind this payload encodes as.
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Empty => TagKind::Empty,
            Self::Byte(_) => TagKind::Byte,
            Self::Short(_) => TagKind::Short,
            Self::Int(_) => TagKind::Int,
            Self::Long(_) => TagKind::Long,
            Self::Float(_) => TagKind::Float,
            Self::Double(_) => TagKind::Double,
            Self::ByteArray(_) => TagKind::ByteArray,
            Self::String(_) => TagKind::String,
            Self::FloatVec3(_) => TagKind::FloatVec3,
            Self::IntVec3(_) => TagKind::IntVec3,
            Self::ByteVec3(_) => TagKind::ByteVec3,
            Self::List(_) => TagKind::List,
            Self::Struct(_) => TagKind::Struct,
            Self::Registration(_) => TagKind::Registration,
            Self::FloatVec4(_) => TagKind::FloatVec4,
        }
    }

    /// Decode a payload of the given kind.
    ///
    /// Kinds 12 and 13 recurse into [`TagList::decode`] and
    /// [`TagStruct::decode`]. Nesting past
    /// [`ByteStream::MAX_DEPTH`] containers fails with
    /// [`CodecError::MalformedRecord`].
    pub fn decode<R: Read>(
        stream: &mut ByteStream<R>,
        kind: TagKind,
    ) -> Result<Self, CodecError> {
        Ok(match kind {
            TagKind::Empty => Self::Empty,
            TagKind::Byte => Self::Byte(stream.read()?),
            TagKind::Short => Self::Short(stream.read()?),
            TagKind::Int => Self::Int(stream.read()?),
            TagKind::Long => Self::Long(stream.read()?),
            TagKind::Float => Self::Float(stream.read()?),
            TagKind::Double => Self::Double(stream.read()?),
            TagKind::ByteArray => Self::ByteArray(stream.read_byte_array()?),
            TagKind::String => Self::String(stream.read_string()?),
            TagKind::FloatVec3 => Self::FloatVec3(stream.read_array()?),
            TagKind::IntVec3 => Self::IntVec3(stream.read_array()?),
            TagKind::ByteVec3 => Self::ByteVec3(stream.read_array()?),
            TagKind::List => {
                stream.descend()?;
                let list = TagList::decode(stream);
                stream.ascend();
                Self::List(list?)
            }
            TagKind::Struct => {
                stream.descend()?;
                let tags = TagStruct::decode(stream);
                stream.ascend();
                Self::Struct(tags?)
            }
            TagKind::Registration => Self::Registration(stream.read()?),
            TagKind::FloatVec4 => Self::FloatVec4(stream.read_array()?),
        })
    }

    /// Encode this payload. [`Payload::Empty`] writes nothing.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        match self {
            Self::Empty => Ok(()),
            Self::Byte(v) => stream.write(*v),
            Self::Short(v) => stream.write(*v),
            Self::Int(v) => stream.write(*v),
            Self::Long(v) => stream.write(*v),
            Self::Float(v) => stream.write(*v),
            Self::Double(v) => stream.write(*v),
            Self::ByteArray(bytes) => stream.write_byte_array(bytes),
            Self::String(text) => stream.write_string(text),
            Self::FloatVec3(v) => stream.write_array(v),
            Self::IntVec3(v) => stream.write_array(v),
            Self::ByteVec3(v) => stream.write_array(v),
            Self::List(list) => list.encode(stream),
            Self::Struct(tags) => tags.encode(stream),
            Self::Registration(v) => stream.write(*v),
            Self::FloatVec4(v) => stream.write_array(v),
        }
    }
}

impl From<TagList> for Payload {
    fn from(list: TagList) -> Self {
        Self::List(list)
    }
}

impl From<TagStruct> for Payload {
    fn from(tags: TagStruct) -> Self {
        Self::Struct(tags)
    }
}
