//! StarMade blueprint header and metadata records.
//!
//! A blueprint directory holds, among other files, a fixed-layout summary
//! record ([`Header`], `header.smbph`) and a sectioned metadata record
//! ([`Meta`], `meta.smbpm`) whose tag section is a [`smade_tag::TagRoot`].
//!
//! # Architecture
//!
//! - [`Header`] decodes/encodes the bounding box and block-count table
//! - [`Meta`] runs the section loop over docking and tag sections
//! - [`Blueprint`] opens both files from a blueprint directory
//!
//! Every file operation opens its own handle and releases it before
//! returning, on success and on failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blueprint;
pub mod entity;
pub mod header;
pub mod meta;

pub use blueprint::{Blueprint, HEADER_FILE_NAME, META_FILE_NAME};
pub use entity::EntityType;
pub use header::Header;
pub use meta::{Meta, MetaDockedEntry, MetaSection};
pub use smade_tag::CodecError;
