//! Error type shared by every decode and encode operation.

use std::io;

use thiserror::Error;

use crate::kind::TagKind;

/// Errors that can occur while decoding or encoding blueprint data.
///
/// Every operation fails fast: the first anomaly is returned to the caller
/// and nothing is retried or defaulted.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An I/O error other than running out of input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fewer bytes remained than the next field requires.
    #[error("truncated input at offset {offset:#x}: need {need} more bytes")]
    TruncatedInput {
        /// Stream offset at which the short read started.
        offset: u64,
        /// Number of bytes the field needed.
        need: usize,
    },

    /// A kind byte outside the closed set `0..=15`.
    #[error("unsupported payload kind {kind}")]
    UnsupportedPayloadKind {
        /// The raw kind byte found on the wire.
        kind: u8,
    },

    /// An integer code that does not map to a known enum value.
    #[error("invalid {field} value {value}")]
    InvalidEnumValue {
        /// Name of the field being decoded.
        field: &'static str,
        /// The value found.
        value: i64,
    },

    /// The data uses a format feature this codec does not implement.
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature {
        /// Short description of the feature.
        feature: &'static str,
    },

    /// Text that is not plain ASCII.
    #[error("encoding error: {detail}")]
    EncodingError {
        /// Human-readable description of what went wrong.
        detail: String,
    },

    /// A record whose structure cannot be decoded or faithfully encoded.
    #[error("malformed record: {detail}")]
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },

    /// A payload was offered to a list declared with a different kind.
    #[error("list of {expected} payloads cannot hold a {found} payload")]
    ListKindMismatch {
        /// The list's declared element kind.
        expected: TagKind,
        /// The kind of the rejected payload.
        found: TagKind,
    },
}

impl CodecError {
    /// Shorthand for [`CodecError::MalformedRecord`].
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            detail: detail.into(),
        }
    }
}
