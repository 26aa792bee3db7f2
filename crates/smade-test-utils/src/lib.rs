//! Test fixtures and proptest strategies for smade development.
//!
//! Provides a tag tree that exercises every payload kind ([`every_kind_tree`]),
//! recursive strategies over payloads and tags ([`strategies`]), and a
//! scratch directory helper for file-level tests ([`ScratchDir`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{every_kind_tree, sample_elements, ScratchDir};
