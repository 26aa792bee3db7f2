//! Tagged binary codec for StarMade blueprint metadata.
//!
//! The format is a small, self-describing, NBT-like encoding: every value
//! carries a one-byte kind code, containers nest recursively, and structs
//! are terminated by a sentinel tag rather than a stored count.
//!
//! # Architecture
//!
//! - [`ByteStream`] wraps any `Read` source or `Write` sink and handles the
//!   big-endian primitive fields and length-prefixed strings/byte arrays
//! - [`Payload`] is the closed set of sixteen value kinds ([`TagKind`])
//! - [`Tag`] pairs an optional name with a payload; the sign of the kind
//!   byte on the wire says whether a name follows
//! - [`TagList`] and [`TagStruct`] are the two recursive containers
//! - [`TagRoot`] is the versioned entry point used by blueprint files
//!
//! # Format
//!
//! ```text
//! TagRoot := [version u16] Tag
//! Tag     := [kind i8 > 0] [name_len u16] [name] Payload
//!          | [kind i8 < 0] Payload
//!          | [0]                                  (sentinel)
//! List    := [element_kind i8] [count u32] Payload*
//! Struct  := Tag* [0]
//! ```
//!
//! All multi-byte values are big-endian with no padding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod list;
pub mod payload;
pub mod root;
pub mod stream;
pub mod tag;

pub use error::CodecError;
pub use kind::TagKind;
pub use list::TagList;
pub use payload::Payload;
pub use root::TagRoot;
pub use stream::{ByteStream, Primitive};
pub use tag::{Tag, TagStruct};
