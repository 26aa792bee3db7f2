//! Errors raised while loading the block tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or parsing the block tables.
#[derive(Debug, Error)]
pub enum BlockConfigError {
    /// A table file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A properties line without a `=` separator.
    #[error("line {line}: expected `NAME = id`, found {text:?}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A properties value that is not a block id.
    #[error("line {line}: {value:?} is not a block id")]
    InvalidId {
        /// 1-based line number.
        line: usize,
        /// The offending value.
        value: String,
    },

    /// The XML document could not be parsed.
    #[error("invalid block config XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The XML root has no `Element` child.
    #[error("block config XML has no <Element> section")]
    MissingElement,

    /// A `Block` element lacks a required attribute.
    #[error("<{element}> is missing the `{attribute}` attribute")]
    MissingAttribute {
        /// Tag name of the element.
        element: String,
        /// The missing attribute.
        attribute: &'static str,
    },

    /// A `Block` refers to a type name absent from the id map.
    #[error("block type {name:?} has no id")]
    UnknownType {
        /// The unresolved type name.
        name: String,
    },
}
