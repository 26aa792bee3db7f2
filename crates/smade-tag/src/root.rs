//! Versioned entry point of a tag tree.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::stream::ByteStream;
use crate::tag::Tag;

/// A `u16` version followed by exactly one root tag.
#[derive(Clone, Debug, PartialEq)]
pub struct TagRoot {
    /// Stream version. [`TagRoot::COMPRESSED_VERSION`] is not supported.
    pub version: u16,
    /// The single root tag.
    pub root: Tag,
}

impl TagRoot {
    /// Version marking a compressed tag stream.
    pub const COMPRESSED_VERSION: u16 = 0x1;

    /// Version written by [`TagRoot::new`].
    pub const PLAIN_VERSION: u16 = 0x0;

    /// Wrap a root tag with [`TagRoot::PLAIN_VERSION`].
    pub fn new(root: Tag) -> Self {
        Self {
            version: Self::PLAIN_VERSION,
            root,
        }
    }

    /// Decode the version and the root tag.
    ///
    /// A compressed stream fails with [`CodecError::UnsupportedFeature`]
    /// right after the version, before any tag bytes are read.
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let version: u16 = stream.read()?;
        if version == Self::COMPRESSED_VERSION {
            return Err(CodecError::UnsupportedFeature {
                feature: "compressed tags",
            });
        }
        let root = Tag::decode(stream)?;
        Ok(Self { version, root })
    }

    /// Encode the version and the root tag.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        if self.version == Self::COMPRESSED_VERSION {
            return Err(CodecError::UnsupportedFeature {
                feature: "compressed tags",
            });
        }
        stream.write(self.version)?;
        self.root.encode(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;

    #[test]
    fn compressed_version_rejected_before_tag_bytes() {
        let bytes = [0x00u8, 0x01, 0x0D, 0x00, 0x01, b'r', 0x00];
        let mut stream = ByteStream::new(bytes.as_slice());
        let err = TagRoot::decode(&mut stream).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnsupportedFeature {
                feature: "compressed tags"
            }
        ));
        assert_eq!(stream.offset(), 2);
    }

    #[test]
    fn compressed_version_is_not_written() {
        let root = TagRoot {
            version: TagRoot::COMPRESSED_VERSION,
            root: Tag::unnamed(Payload::Int(1)),
        };
        let mut stream = ByteStream::new(Vec::new());
        assert!(matches!(
            root.encode(&mut stream),
            Err(CodecError::UnsupportedFeature { .. })
        ));
        assert!(stream.into_inner().is_empty());
    }

    #[test]
    fn plain_root_roundtrips() {
        let root = TagRoot::new(Tag::named("seed", Payload::Long(-5)));
        let mut stream = ByteStream::new(Vec::new());
        root.encode(&mut stream).unwrap();
        let bytes = stream.into_inner();
        assert_eq!(&bytes[..3], [0x00, 0x00, 0x04]);
        let got = TagRoot::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
        assert_eq!(got, root);
    }

    #[test]
    fn other_versions_are_preserved() {
        let root = TagRoot {
            version: 7,
            root: Tag::unnamed(Payload::Registration(3)),
        };
        let mut stream = ByteStream::new(Vec::new());
        root.encode(&mut stream).unwrap();
        let bytes = stream.into_inner();
        assert_eq!(bytes, [0x00, 0x07, 0xF2, 0x03]);
        assert_eq!(
            TagRoot::decode(&mut ByteStream::new(bytes.as_slice())).unwrap(),
            root
        );
    }
}
