//! Benchmark workloads for the smade codecs.
//!
//! - [`station_header`]: a summary record with one entry per block id
//! - [`ship_meta`]: a metadata record with docked entries and a wide tag tree
//! - [`wide_tree`]: a tag tree of `n` cell structs inside a list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use smade_blueprint::{EntityType, Header, Meta, MetaDockedEntry};
use smade_tag::{Payload, Tag, TagKind, TagList, TagRoot, TagStruct};

/// A station header counting `ids` distinct block types.
///
/// Ids are inserted in descending order so encoding pays for the sort.
pub fn station_header(ids: u16) -> Header {
    Header {
        version: 2,
        entity_type: EntityType::Station,
        bbox_min: [-64.0, -32.0, -64.0],
        bbox_max: [64.0, 32.0, 64.0],
        elements: (0..ids)
            .rev()
            .map(|id| (id, u32::from(id) * 17 + 1))
            .collect(),
    }
}

/// A tag tree holding `cells` structs, each with a position, a name and
/// a small byte payload.
pub fn wide_tree(cells: usize) -> TagRoot {
    let elements = (0..cells).map(|i| {
        let x = i as i32;
        let cell: TagStruct = vec![
            Tag::named("pos", Payload::IntVec3([x, x / 2, -x])),
            Tag::named("name", Payload::String(format!("cell-{i}"))),
            Tag::named("data", Payload::ByteArray(vec![i as u8; 16])),
            Tag::named("hp", Payload::Float(1.0)),
        ]
        .into();
        Payload::Struct(cell)
    });
    let list = TagList::from_payloads(TagKind::Struct, elements).unwrap();
    let root: TagStruct = vec![Tag::named("cells", list)].into();
    TagRoot::new(Tag::named("segment", root))
}

/// A metadata record with `docked` entries and a [`wide_tree`] of `cells`.
pub fn ship_meta(docked: usize, cells: usize) -> Meta {
    Meta {
        version: 0,
        docked: Some(
            (0..docked)
                .map(|i| MetaDockedEntry {
                    name: format!("turret-{i}"),
                    position: [i as i32, 4, -(i as i32)],
                    size: [3.0, 3.0, 5.0],
                    style: 0,
                    orientation: (i % 6) as i8,
                })
                .collect(),
        ),
        tags: Some(wide_tree(cells)),
    }
}
