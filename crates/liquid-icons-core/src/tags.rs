//! Tag-metadata loading and structural validation.
//!
//! Tag maps are untrusted external JSON shipped inside an icon package
//! (`tags.json`). The contract is strict: a non-empty object mapping icon
//! names to arrays of strings. Anything else is a hard validation failure,
//! never a silent "no tags": a tag-supporting provider with unreadable tag
//! data is a corrupted install.

use crate::error::{IconsError, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// Icon name to tag list, in file order.
pub type TagMap = IndexMap<String, Vec<String>>;

const SHAPE_MSG: &str = "expected a non-empty object of string arrays";

/// Read and validate a `tags.json` file.
pub fn load_tag_map(path: &Path) -> Result<TagMap> {
    let raw = std::fs::read_to_string(path).map_err(|source| IconsError::TagMapRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tag_map(&raw)
}

/// Validate raw JSON against the tag-map structural contract.
pub fn parse_tag_map(raw: &str) -> Result<TagMap> {
    // Deserializing straight into a map rejects null, arrays, and scalars.
    let entries: IndexMap<String, Value> = serde_json::from_str(raw)
        .map_err(|e| IconsError::InvalidTagMap(format!("{SHAPE_MSG} ({e})")))?;

    if entries.is_empty() {
        return Err(IconsError::InvalidTagMap(SHAPE_MSG.to_string()));
    }

    let mut map = TagMap::with_capacity(entries.len());
    for (icon, value) in entries {
        let tags = value
            .as_array()
            .ok_or_else(|| IconsError::InvalidTagMap(format!("tags for '{icon}': {SHAPE_MSG}")))?
            .iter()
            .map(|tag| {
                tag.as_str().map(str::to_string).ok_or_else(|| {
                    IconsError::InvalidTagMap(format!("non-string tag for '{icon}'"))
                })
            })
            .collect::<Result<Vec<String>>>()?;
        map.insert(icon, tags);
    }
    Ok(map)
}

/// Every tag appearing in the map, deduplicated and alphabetically sorted.
pub fn tag_names_from(map: &TagMap) -> Vec<String> {
    let mut names: Vec<String> = map.values().flatten().cloned().collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_map_parses_in_order() {
        let map = parse_tag_map(r#"{"arrow-up": ["arrow", "direction"], "menu": ["nav"]}"#)
            .unwrap();
        let icons: Vec<&String> = map.keys().collect();
        assert_eq!(icons, ["arrow-up", "menu"]);
        assert_eq!(map["arrow-up"], vec!["arrow", "direction"]);
    }

    #[test]
    fn rejects_wrong_shapes() {
        for raw in [
            "{}",
            "null",
            "[]",
            "42",
            "\"tags\"",
            r#"{"menu": "not-an-array"}"#,
            r#"{"menu": ["ok", 123]}"#,
            "not json at all",
        ] {
            let err = parse_tag_map(raw).unwrap_err();
            assert!(
                matches!(err, IconsError::InvalidTagMap(_)),
                "expected InvalidTagMap for {raw}"
            );
        }
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = load_tag_map(Path::new("/nonexistent/tags.json")).unwrap_err();
        assert!(matches!(err, IconsError::TagMapRead { .. }));
    }

    #[test]
    fn tag_names_are_sorted_and_deduped() {
        let map = parse_tag_map(
            r#"{"arrow-up": ["direction", "arrow"], "arrow-down": ["arrow", "direction"]}"#,
        )
        .unwrap();
        assert_eq!(tag_names_from(&map), vec!["arrow", "direction"]);
    }

    #[test]
    fn single_entry_map_yields_its_tags() {
        let map = parse_tag_map(r#"{"arrow-up": ["arrow", "direction"]}"#).unwrap();
        assert_eq!(tag_names_from(&map), vec!["arrow", "direction"]);
    }
}
