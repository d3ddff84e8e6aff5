use crate::output::print_json;
use anyhow::Context;
use liquid_icons_core::{registry, IconSet};
use std::path::Path;

/// Search a library for icons by name, or by tag with `--tag`.
pub fn run(root: &Path, library: &str, term: &str, by_tag: bool, json: bool) -> anyhow::Result<()> {
    let set = registry::get_icon_set(root, library)
        .with_context(|| format!("failed to load icon set '{library}'"))?;

    if by_tag {
        let icons = set.find_icons_by_tag(term);

        if json {
            return print_json(&serde_json::json!({ "tag": term, "icons": icons }));
        }

        if icons.is_empty() {
            println!("Did not find any icons tagged \"{term}\"");
        } else {
            println!("Found the following icons tagged \"{term}\":");
            println!("  {}", icons.join(", "));
        }
        return Ok(());
    }

    let exact = set.find_exact_match(term);
    let similar = set.find_similar(term);

    if json {
        return print_json(&serde_json::json!({
            "term": term,
            "exact": exact,
            "similar": similar,
        }));
    }

    if let Some(name) = exact {
        println!("Found exact match: {name}");
    }

    if similar.is_empty() {
        println!("Nothing found approximating {term}");
    } else {
        println!("Found similar: {}", similar.join(", "));
    }

    Ok(())
}
