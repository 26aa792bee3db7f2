//! Sectioned metadata record (`meta.smbpm`).
//!
//! ```text
//! [version i32] { [section i8] [body] }* [finish = 1]
//!
//! docking (3):          [count u32] count × MetaDockedEntry
//! segment manager (2):  TagRoot
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use smade_tag::{ByteStream, CodecError, TagRoot};

/// Upper bound on capacity reserved from an untrusted count.
const MAX_PREALLOC: usize = 1024;

/// Section marker byte in a metadata record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum MetaSection {
    /// End of record; no body.
    Finish = 1,
    /// A [`TagRoot`]; always the last section in practice.
    SegmentManager = 2,
    /// A count followed by docked entries.
    Docking = 3,
}

impl MetaSection {
    /// Map a marker byte to its section.
    pub fn from_code(code: i8) -> Result<Self, CodecError> {
        match code {
            1 => Ok(Self::Finish),
            2 => Ok(Self::SegmentManager),
            3 => Ok(Self::Docking),
            _ => Err(CodecError::malformed(format!(
                "unknown meta section tag {code}"
            ))),
        }
    }

    /// The marker byte of this section.
    pub fn code(self) -> i8 {
        self as i8
    }
}

/// One sub-entity docked to the blueprint's main entity.
#[derive(Clone, Debug, PartialEq)]
pub struct MetaDockedEntry {
    /// Name of the docked blueprint.
    pub name: String,
    /// Dock position, in blocks.
    pub position: [i32; 3],
    /// Size of the docked entity.
    pub size: [f32; 3],
    /// Dock style.
    pub style: i16,
    /// Orientation code.
    pub orientation: i8,
}

impl MetaDockedEntry {
    /// Decode name, position, size, style and orientation, in that order.
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        Ok(Self {
            name: stream.read_string()?,
            position: stream.read_array()?,
            size: stream.read_array()?,
            style: stream.read()?,
            orientation: stream.read()?,
        })
    }

    /// Encode the entry.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        stream.write_string(&self.name)?;
        stream.write_array(&self.position)?;
        stream.write_array(&self.size)?;
        stream.write(self.style)?;
        stream.write(self.orientation)
    }
}

/// Blueprint metadata: optional docking list and optional tag tree.
///
/// Decoding stops at `finish` or right after a segment-manager section.
/// Encoding always writes docking, then tags, then `finish`, skipping
/// whichever of the first two is absent.
///
/// # Examples
///
/// ```
/// use smade_blueprint::Meta;
/// use smade_tag::ByteStream;
///
/// let meta = Meta { version: 0, docked: None, tags: None };
/// let mut out = ByteStream::new(Vec::new());
/// meta.encode(&mut out).unwrap();
/// assert_eq!(out.into_inner(), [0, 0, 0, 0, 1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Meta {
    /// Record version.
    pub version: i32,
    /// Docked sub-entities, if the record has a docking section.
    pub docked: Option<Vec<MetaDockedEntry>>,
    /// Tag tree, if the record has a segment-manager section.
    pub tags: Option<TagRoot>,
}

impl Meta {
    /// Decode a metadata record.
    ///
    /// An unknown section marker fails with
    /// [`CodecError::MalformedRecord`].
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let mut meta = Self {
            version: stream.read()?,
            ..Self::default()
        };

        loop {
            match MetaSection::from_code(stream.read()?)? {
                MetaSection::Finish => break,
                MetaSection::Docking => {
                    let count = stream.read::<u32>()? as usize;
                    let mut entries = Vec::with_capacity(count.min(MAX_PREALLOC));
                    for _ in 0..count {
                        entries.push(MetaDockedEntry::decode(stream)?);
                    }
                    meta.docked = Some(entries);
                }
                MetaSection::SegmentManager => {
                    meta.tags = Some(TagRoot::decode(stream)?);
                    break;
                }
            }
        }

        Ok(meta)
    }

    /// Encode the record: docking, tags, then `finish`.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        stream.write(self.version)?;

        if let Some(entries) = &self.docked {
            let count = u32::try_from(entries.len()).map_err(|_| {
                CodecError::malformed(format!("{} docked entries exceed u32", entries.len()))
            })?;
            stream.write(MetaSection::Docking.code())?;
            stream.write(count)?;
            for entry in entries {
                entry.encode(stream)?;
            }
        }

        if let Some(tags) = &self.tags {
            stream.write(MetaSection::SegmentManager.code())?;
            tags.encode(stream)?;
        }

        stream.write(MetaSection::Finish.code())
    }

    /// Read a metadata file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let file = File::open(path)?;
        Self::decode(&mut ByteStream::new(BufReader::new(file)))
    }

    /// Write a metadata file, replacing any existing one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let file = File::create(path)?;
        let mut stream = ByteStream::new(BufWriter::new(file));
        self.encode(&mut stream)?;
        stream.flush()
    }
}
