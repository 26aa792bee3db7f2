//! `BlockTypes.properties` parsing.

use indexmap::IndexMap;

use crate::error::BlockConfigError;

/// Parse `NAME = id` lines into a name to id map.
///
/// Surrounding whitespace is ignored. Blank lines and lines starting with
/// `#` or `!` are skipped. A repeated name keeps its last id.
///
/// # Examples
///
/// ```
/// use smade_blocks::parse_id_map;
///
/// let map = parse_id_map("# cores\nCORE = 1\n\nHULL=5\n").unwrap();
/// assert_eq!(map["CORE"], 1);
/// assert_eq!(map["HULL"], 5);
/// ```
pub fn parse_id_map(text: &str) -> Result<IndexMap<String, u16>, BlockConfigError> {
    let mut map = IndexMap::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (name, value) = line
            .split_once('=')
            .ok_or_else(|| BlockConfigError::InvalidLine {
                line: i + 1,
                text: raw.to_string(),
            })?;
        let value = value.trim();
        let id = value.parse().map_err(|_| BlockConfigError::InvalidId {
            line: i + 1,
            value: value.to_string(),
        })?;
        map.insert(name.trim().to_string(), id);
    }
    Ok(map)
}
