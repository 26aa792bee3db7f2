//! Blueprint directories.

use std::path::{Path, PathBuf};

use smade_tag::CodecError;

use crate::header::Header;
use crate::meta::Meta;

/// File name of the summary record inside a blueprint directory.
pub const HEADER_FILE_NAME: &str = "header.smbph";

/// File name of the metadata record inside a blueprint directory.
pub const META_FILE_NAME: &str = "meta.smbpm";

/// The decoded records of one blueprint directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Blueprint {
    /// Directory the records were read from.
    pub path: PathBuf,
    /// The summary record. Every blueprint has one.
    pub header: Header,
    /// The metadata record, when the directory has one.
    pub meta: Option<Meta>,
}

impl Blueprint {
    /// Read `header.smbph` and, if present, `meta.smbpm` from `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CodecError> {
        let dir = dir.as_ref();
        let header = Header::load(dir.join(HEADER_FILE_NAME))?;
        let meta_path = dir.join(META_FILE_NAME);
        let meta = if meta_path.is_file() {
            Some(Meta::load(meta_path)?)
        } else {
            None
        };
        Ok(Self {
            path: dir.to_path_buf(),
            header,
            meta,
        })
    }

    /// Write the header and, if set, the metadata into `dir`.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<(), CodecError> {
        let dir = dir.as_ref();
        self.header.save(dir.join(HEADER_FILE_NAME))?;
        if let Some(meta) = &self.meta {
            meta.save(dir.join(META_FILE_NAME))?;
        }
        Ok(())
    }
}
