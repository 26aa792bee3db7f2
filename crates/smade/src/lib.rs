//! Smade: readers and writers for StarMade blueprint files.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the smade sub-crates. For most users, adding `smade` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use smade::prelude::*;
//!
//! // A metadata record with one docked turret and a small tag tree.
//! let tree: TagStruct = vec![
//!     Tag::named("name", Payload::String("Isanth".into())),
//!     Tag::named("mass", Payload::Float(12.5)),
//! ]
//! .into();
//! let meta = Meta {
//!     version: 0,
//!     docked: Some(vec![MetaDockedEntry {
//!         name: "turret".into(),
//!         position: [0, 4, 0],
//!         size: [3.0, 3.0, 3.0],
//!         style: 0,
//!         orientation: 2,
//!     }]),
//!     tags: Some(TagRoot::new(Tag::named("ship", tree))),
//! };
//!
//! let mut out = ByteStream::new(Vec::new());
//! meta.encode(&mut out).unwrap();
//! let bytes = out.into_inner();
//!
//! let decoded = Meta::decode(&mut ByteStream::new(bytes.as_slice())).unwrap();
//! assert_eq!(decoded, meta);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`tag`] | `smade-tag` | Byte stream, payloads, tags, lists, structs, tag roots |
//! | [`blueprint`] | `smade-blueprint` | Header, metadata, blueprint directories |
//! | [`blocks`] | `smade-blocks` | Block id to name and category lookup |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tagged binary codec (`smade-tag`).
///
/// [`tag::ByteStream`] handles the big-endian primitives; [`tag::TagRoot`]
/// is the entry point for whole tag trees.
pub use smade_tag as tag;

/// Blueprint records (`smade-blueprint`).
///
/// [`blueprint::Header`] and [`blueprint::Meta`] decode and encode the
/// two record files; [`blueprint::Blueprint`] opens a whole directory.
pub use smade_blueprint as blueprint;

/// Block lookup tables (`smade-blocks`).
///
/// [`blocks::BlockConfig`] resolves block ids to names and categories
/// from the game's data files.
pub use smade_blocks as blocks;

/// Common imports for typical smade usage.
///
/// ```rust
/// use smade::prelude::*;
/// ```
///
/// This imports the record types, the tag tree types, the byte stream,
/// and the block lookup table.
pub mod prelude {
    // Tag codec
    pub use smade_tag::{ByteStream, Payload, Tag, TagKind, TagList, TagRoot, TagStruct};

    // Records
    pub use smade_blueprint::{
        Blueprint, EntityType, Header, Meta, MetaDockedEntry, HEADER_FILE_NAME, META_FILE_NAME,
    };

    // Block lookup
    pub use smade_blocks::{Block, BlockConfig, BlockConfigPaths};

    // Errors
    pub use smade_blocks::BlockConfigError;
    pub use smade_tag::CodecError;
}
