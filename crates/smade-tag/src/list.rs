//! Homogeneous payload lists.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::kind::TagKind;
use crate::payload::Payload;
use crate::stream::ByteStream;

/// Upper bound on capacity reserved from an untrusted count.
const MAX_PREALLOC: usize = 4096;

/// A sequence of payloads that all share one declared kind.
///
/// Fields are private: every insertion goes through a kind check, so a
/// heterogeneous list cannot be built.
///
/// # Examples
///
/// ```
/// use smade_tag::{ByteStream, Payload, TagKind, TagList};
///
/// let list = TagList::from_payloads(
///     TagKind::Byte,
///     [Payload::Byte(1), Payload::Byte(2), Payload::Byte(3)],
/// )
/// .unwrap();
///
/// let mut out = ByteStream::new(Vec::new());
/// list.encode(&mut out).unwrap();
/// assert_eq!(out.into_inner(), [0x01, 0x00, 0x00, 0x00, 0x03, 0x01, 0x02, 0x03]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TagList {
    element_kind: TagKind,
    elements: Vec<Payload>,
}

impl TagList {
    /// An empty list of the given element kind.
    pub fn new(element_kind: TagKind) -> Self {
        Self {
            element_kind,
            elements: Vec::new(),
        }
    }

    /// Build a list, rejecting any payload of another kind.
    pub fn from_payloads(
        element_kind: TagKind,
        payloads: impl IntoIterator<Item = Payload>,
    ) -> Result<Self, CodecError> {
        let mut list = Self::new(element_kind);
        for payload in payloads {
            list.push(payload)?;
        }
        Ok(list)
    }

    /// Append a payload of the declared kind.
    pub fn push(&mut self, payload: Payload) -> Result<(), CodecError> {
        let found = payload.kind();
        if found != self.element_kind {
            return Err(CodecError::ListKindMismatch {
                expected: self.element_kind,
                found,
            });
        }
        self.elements.push(payload);
        Ok(())
    }

    /// The declared element kind.
    pub fn element_kind(&self) -> TagKind {
        self.element_kind
    }

    /// The elements, in order.
    pub fn elements(&self) -> &[Payload] {
        &self.elements
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Payload> {
        self.elements.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the list and return its elements.
    pub fn into_elements(self) -> Vec<Payload> {
        self.elements
    }

    /// Decode the element kind, the `u32` count, then that many payloads.
    ///
    /// Elements of kind [`TagKind::Empty`] occupy no bytes, so a non-zero
    /// count of them is rejected as [`CodecError::MalformedRecord`].
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let code: i8 = stream.read()?;
        // Negative codes land above 127 and are rejected with the raw byte.
        let element_kind = TagKind::from_code(code as u8)?;
        let count = stream.read::<u32>()? as usize;
        if element_kind == TagKind::Empty && count > 0 {
            return Err(CodecError::malformed(format!(
                "list of {count} empty payloads"
            )));
        }
        let mut elements = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            elements.push(Payload::decode(stream, element_kind)?);
        }
        Ok(Self {
            element_kind,
            elements,
        })
    }

    /// Encode the element kind, the count, then every element in order.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        let count = u32::try_from(self.elements.len()).map_err(|_| {
            CodecError::malformed(format!(
                "list of {} elements exceeds the u32 count",
                self.elements.len()
            ))
        })?;
        if self.element_kind == TagKind::Empty && count > 0 {
            return Err(CodecError::malformed(format!(
                "list of {count} empty payloads"
            )));
        }
        stream.write(self.element_kind.code() as i8)?;
        stream.write(count)?;
        for element in &self.elements {
            element.encode(stream)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Payload;
    type IntoIter = std::slice::Iter<'a, Payload>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
