//! Fixed-layout summary record (`header.smbph`).
//!
//! ```text
//! [version i32] [entity_type i32]
//! [xmin f32] [ymin f32] [zmin f32] [xmax f32] [ymax f32] [zmax f32]
//! [element_count u32] element_count × ([block_id u16] [count u32])
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use smade_tag::{ByteStream, CodecError};

use crate::entity::EntityType;

/// Bounding box and block-count table of a blueprint.
///
/// `elements` keeps whatever order it was built or decoded in; encoding
/// always writes the pairs in ascending block-id order so output is
/// byte-stable.
///
/// # Examples
///
/// ```
/// use smade_blueprint::{EntityType, Header};
/// use smade_tag::ByteStream;
///
/// let header = Header {
///     version: 1,
///     entity_type: EntityType::Ship,
///     bbox_min: [-2.0, -2.0, -2.0],
///     bbox_max: [2.0, 2.0, 2.0],
///     elements: [(5, 10), (1, 3)].into_iter().collect(),
/// };
///
/// let mut out = ByteStream::new(Vec::new());
/// header.encode(&mut out).unwrap();
/// let bytes = out.into_inner();
/// // 36 fixed bytes, then (1, 3) before (5, 10).
/// assert_eq!(&bytes[36..42], [0, 1, 0, 0, 0, 3]);
///
/// let got = Header::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
/// assert_eq!(got, header);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Record version.
    pub version: i32,
    /// Entity classification.
    pub entity_type: EntityType,
    /// Minimum corner of the axis-aligned bounding box.
    pub bbox_min: [f32; 3],
    /// Maximum corner of the axis-aligned bounding box.
    pub bbox_max: [f32; 3],
    /// Block id to block count.
    pub elements: IndexMap<u16, u32>,
}

impl Header {
    /// Decode a header.
    ///
    /// A block id that appears twice keeps the last count read.
    pub fn decode<R: Read>(stream: &mut ByteStream<R>) -> Result<Self, CodecError> {
        let version = stream.read()?;
        let entity_type = EntityType::from_code(stream.read()?)?;
        let bbox_min = stream.read_array()?;
        let bbox_max = stream.read_array()?;
        let count = stream.read::<u32>()? as usize;

        let mut elements = IndexMap::with_capacity(count.min(u16::MAX as usize + 1));
        for _ in 0..count {
            let block_id: u16 = stream.read()?;
            let block_count: u32 = stream.read()?;
            elements.insert(block_id, block_count);
        }

        Ok(Self {
            version,
            entity_type,
            bbox_min,
            bbox_max,
            elements,
        })
    }

    /// Encode the header, writing element pairs by ascending block id.
    pub fn encode<W: Write>(&self, stream: &mut ByteStream<W>) -> Result<(), CodecError> {
        stream.write(self.version)?;
        stream.write(self.entity_type.code())?;
        stream.write_array(&self.bbox_min)?;
        stream.write_array(&self.bbox_max)?;

        let elements = self.sorted_elements();
        // At most 65536 distinct u16 ids, so the count always fits.
        stream.write(elements.len() as u32)?;
        for (block_id, block_count) in elements {
            stream.write(block_id)?;
            stream.write(block_count)?;
        }
        Ok(())
    }

    /// Element pairs in ascending block-id order.
    pub fn sorted_elements(&self) -> Vec<(u16, u32)> {
        let mut pairs: Vec<(u16, u32)> = self.elements.iter().map(|(&k, &v)| (k, v)).collect();
        pairs.sort_unstable_by_key(|&(block_id, _)| block_id);
        pairs
    }

    /// Sum of all block counts.
    pub fn total_blocks(&self) -> u64 {
        self.elements.values().map(|&n| u64::from(n)).sum()
    }

    /// Read a header file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let file = File::open(path)?;
        Self::decode(&mut ByteStream::new(BufReader::new(file)))
    }

    /// Write a header file, replacing any existing one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let file = File::create(path)?;
        let mut stream = ByteStream::new(BufWriter::new(file));
        self.encode(&mut stream)?;
        stream.flush()
    }
}
