//! Named and unnamed tags, and the sentinel-terminated struct container.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::kind::TagKind;
use crate::payload::Payload;
use crate::stream::ByteStream;

/// An optional name paired with a payload.
///
/// On the wire the name's presence is carried by the sign of the kind
/// byte: positive means a name follows, negative means it does not. The
/// model keeps that as a plain `Option` and only the codec deals in signs.
///
/// The sentinel (no name, [`Payload::Empty`]) is written as a single zero
/// byte and ends a [`TagStruct`]. No other tag may carry an empty payload.
///
/// # Examples
///
/// ```
/// use smade_tag::{ByteStream, Payload, Tag};
///
/// let tag = Tag::named("mass", Payload::Short(5));
/// let mut out = ByteStream::new(Vec::new());
/// tag.encode(&mut out).unwrap();
/// assert_eq!(out.into_inner(), [0x02, 0x00, 0x04, b'm', b'a', b's', b's', 0x00, 0x05]);
///
/// let tag = Tag::unnamed(Payload::Short(5));
/// let mut out = ByteStream::new(Vec::new());
/// tag.encode(&mut out).unwrap();
/// assert_eq!(out.into_inner(), [0xFE, 0x00, 0x05]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    /// Tag name, if any.
    pub name: Option<String>,
    /// The tagged value.
    pub payload: Payload,
}

impl Tag {
    /// A tag with a name.
    pub fn named(name: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self {
            name: Some(name.into()),
            payload: payload.into(),
        }
    }

    /// A tag without a name.
    pub fn unnamed(payload: impl Into<Payload>) -> Self {
        Self {
            name: None,
            payload: payload.into(),
        }
    }

    /// The struct terminator.
    pub fn sentinel() -> Self {
        Self {
            name: None,
            payload: Payload::Empty,
        }
    }

    /// Whether this is the struct terminator.
    pub fn is_sentinel(&self) -> bool {
        self.name.is_none() && self.payload == Payload::Empty
    }

    /// Kind of the wrapped payload.
    pub fn kind(&self) -> TagKind {
        self.payload.kind()
    }

    /// Decode one tag, or the sentinel if the type byte is zero.
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let code: i8 = stream.read()?;
        if code == 0 {
            return Ok(Self::sentinel());
        }
        let kind = TagKind::from_code(code.unsigned_abs())?;
        let name = if code > 0 {
            Some(stream.read_string()?)
        } else {
            None
        };
        let payload = Payload::decode(stream, kind)?;
        Ok(Self { name, payload })
    }

    /// Encode this tag.
    ///
    /// Fails with [`CodecError::MalformedRecord`] for a named tag with an
    /// empty payload, which has no wire representation.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        let kind = self.kind();
        if kind == TagKind::Empty {
            return match &self.name {
                None => stream.write(0i8),
                Some(name) => Err(CodecError::malformed(format!(
                    "tag {name:?} has an empty payload"
                ))),
            };
        }
        // Kind codes stop at 15, so the cast cannot wrap.
        let code = kind.code() as i8;
        match &self.name {
            Some(name) => {
                stream.write(code)?;
                stream.write_string(name)?;
            }
            None => stream.write(-code)?,
        }
        self.payload.encode(stream)
    }
}

/// Ordered sequence of tags, terminated on the wire by the sentinel.
///
/// The sentinel is structural: it is consumed by [`decode`](Self::decode)
/// and appended by [`encode`](Self::encode), never stored. Order is
/// preserved exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagStruct {
    tags: Vec<Tag>,
}

impl TagStruct {
    /// An empty struct.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag.
    ///
    /// The sentinel is structural and cannot be stored; pushing it fails
    /// with [`CodecError::MalformedRecord`].
    pub fn push(&mut self, tag: Tag) -> Result<(), CodecError> {
        if tag.is_sentinel() {
            return Err(CodecError::malformed(format!(
                "sentinel cannot be struct member {}",
                self.tags.len()
            )));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// The stored tags, in order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Iterate over the stored tags.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Number of stored tags (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the struct holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// First tag carrying the given name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name.as_deref() == Some(name))
    }

    /// Consume the struct and return its tags.
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    /// Decode tags until the sentinel.
    ///
    /// Running out of input before a sentinel surfaces as
    /// [`CodecError::TruncatedInput`].
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let mut tags = Vec::new();
        loop {
            let tag = Tag::decode(stream)?;
            if tag.is_sentinel() {
                break;
            }
            tags.push(tag);
        }
        Ok(Self { tags })
    }

    /// Encode every tag in order, then the sentinel.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        for (i, tag) in self.tags.iter().enumerate() {
            if tag.is_sentinel() {
                return Err(CodecError::malformed(format!(
                    "struct member {i} is a sentinel"
                )));
            }
            tag.encode(stream)?;
        }
        Tag::sentinel().encode(stream)
    }
}

/// Unchecked: a sentinel among `tags` is kept and rejected by
/// [`TagStruct::encode`]. Use [`TagStruct::push`] to reject it up front.
impl From<Vec<Tag>> for TagStruct {
    fn from(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

impl FromIterator<Tag> for TagStruct {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagStruct {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
