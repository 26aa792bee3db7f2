//! Block id to name and category lookup from StarMade game data.
//!
//! Two files from the game's `data/config` directory feed the table:
//!
//! - `BlockTypes.properties` maps type names to integer ids
//!   (`ENGINE = 8`), parsed by [`parse_id_map`]
//! - `BlockConfig.xml` is a category tree whose `Block` leaves carry a
//!   `type` and a display `name`, walked by [`BlockConfig::from_sources`]
//!
//! The table is independent of the blueprint codecs; the reporting tool
//! joins the two.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod properties;

pub use config::{Block, BlockConfig, BlockConfigPaths};
pub use error::BlockConfigError;
pub use properties::parse_id_map;
