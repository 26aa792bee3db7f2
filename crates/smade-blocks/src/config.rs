//! The block lookup table.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::BlockConfigError;
use crate::properties::parse_id_map;

/// Category every block path starts from.
const ROOT_CATEGORY: &str = "Blocks";

/// Display name and category of one block type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Human-readable name.
    pub name: String,
    /// Dotted category path, e.g. `Blocks.Ship.Weapons`.
    pub category: String,
}

/// Locations of the two game data files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockConfigPaths {
    /// `BlockTypes.properties`.
    pub properties: PathBuf,
    /// `BlockConfig.xml`.
    pub xml: PathBuf,
}

impl BlockConfigPaths {
    /// The standard locations under a game installation directory.
    pub fn from_game_root(root: impl AsRef<Path>) -> Self {
        let config = root.as_ref().join("data").join("config");
        Self {
            properties: config.join("BlockTypes.properties"),
            xml: config.join("BlockConfig.xml"),
        }
    }
}

/// Block id to [`Block`] table.
///
/// # Examples
///
/// ```
/// use smade_blocks::BlockConfig;
///
/// let ids = "CORE = 1\nCANNON = 6\n";
/// let xml = r#"<Config><Element>
///     <Ship><Block type="CORE" name="Ship Core"/>
///           <Weapons><Block type="CANNON" name="Cannon Barrel"/></Weapons></Ship>
/// </Element></Config>"#;
///
/// let config = BlockConfig::from_sources(ids, xml).unwrap();
/// assert_eq!(config.name_of(6), Some("Cannon Barrel"));
/// assert_eq!(config.get(6).unwrap().category, "Blocks.Ship.Weapons");
/// assert_eq!(config.get(1).unwrap().category, "Blocks.Ship");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockConfig {
    blocks: IndexMap<u16, Block>,
}

impl BlockConfig {
    /// Read and parse both files.
    pub fn load(paths: &BlockConfigPaths) -> Result<Self, BlockConfigError> {
        let properties = read(&paths.properties)?;
        let xml = read(&paths.xml)?;
        Self::from_sources(&properties, &xml)
    }

    /// Build the table from the two documents' text.
    ///
    /// The category tree is walked breadth-first from the root's first
    /// `Element` child. Each non-`Block` element appends `.{tag}` to the
    /// category of its children. When two `Block`s resolve to the same
    /// id, the one visited last wins.
    pub fn from_sources(properties: &str, xml: &str) -> Result<Self, BlockConfigError> {
        let ids = parse_id_map(properties)?;
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let section = doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name("Element"))
            .ok_or(BlockConfigError::MissingElement)?;

        let mut queue: VecDeque<(String, Node<'_, '_>)> = section
            .children()
            .filter(Node::is_element)
            .map(|n| (ROOT_CATEGORY.to_string(), n))
            .collect();

        let mut blocks = IndexMap::new();
        while let Some((category, node)) = queue.pop_front() {
            let tag = node.tag_name().name();
            if tag != "Block" {
                let category = format!("{category}.{tag}");
                queue.extend(
                    node.children()
                        .filter(Node::is_element)
                        .map(|child| (category.clone(), child)),
                );
                continue;
            }

            let type_name = required(node, "type")?;
            let name = required(node, "name")?;
            let id = *ids
                .get(type_name)
                .ok_or_else(|| BlockConfigError::UnknownType {
                    name: type_name.to_string(),
                })?;
            blocks.insert(
                id,
                Block {
                    name: name.to_string(),
                    category,
                },
            );
        }

        Ok(Self { blocks })
    }

    /// The block registered under `id`.
    pub fn get(&self, id: u16) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Display name of the block registered under `id`.
    pub fn name_of(&self, id: u16) -> Option<&str> {
        self.get(id).map(|b| b.name.as_str())
    }

    /// Number of known blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are known.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over `(id, block)` in document order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Block)> {
        self.blocks.iter().map(|(&id, block)| (id, block))
    }
}

fn read(path: &Path) -> Result<String, BlockConfigError> {
    fs::read_to_string(path).map_err(|source| BlockConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn required<'a>(node: Node<'a, '_>, attribute: &'static str) -> Result<&'a str, BlockConfigError> {
    node.attribute(attribute)
        .ok_or_else(|| BlockConfigError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute,
        })
}
