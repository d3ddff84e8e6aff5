use crate::output::{print_json, print_table};
use anyhow::Context;
use liquid_icons_core::{registry, IconSet};
use std::path::Path;

/// List every tag a library knows about, with its icon count.
pub fn run(root: &Path, library: &str, json: bool) -> anyhow::Result<()> {
    let set = registry::get_icon_set(root, library)
        .with_context(|| format!("failed to load icon set '{library}'"))?;

    if !set.supports_tags() || set.get_tags().is_empty() {
        if json {
            return print_json(&serde_json::json!({ "tags": [] }));
        }
        println!("{library} has no tags");
        return Ok(());
    }

    if json {
        let tags: Vec<_> = set
            .get_tags()
            .iter()
            .map(|tag| {
                serde_json::json!({
                    "tag": tag,
                    "icons": set.find_icons_by_tag(tag),
                })
            })
            .collect();
        return print_json(&tags);
    }

    println!("Found the following tags:");
    let rows: Vec<Vec<String>> = set
        .get_tags()
        .iter()
        .map(|tag| {
            let count = set.find_icons_by_tag(tag).len();
            vec![tag.clone(), count.to_string()]
        })
        .collect();
    print_table(&["TAG", "ICONS"], &rows);

    Ok(())
}
