use crate::output::print_json;
use anyhow::Context;
use liquid_icons_core::{registry, IconSet};
use std::path::Path;

/// List a library's variants. The `default` key shows its target in
/// parentheses.
pub fn run(root: &Path, library: &str, json: bool) -> anyhow::Result<()> {
    let set = registry::get_icon_set(root, library)
        .with_context(|| format!("failed to load icon set '{library}'"))?;

    let variants = set.data().variants();

    if json {
        return print_json(&variants);
    }

    if let [only] = variants.keys().collect::<Vec<_>>().as_slice() {
        println!("{library} contains only one variant: {only}");
        return Ok(());
    }

    println!("{library} contains the following variants:");
    for (key, target) in variants {
        if key == "default" {
            println!("  * {key} ({target})");
        } else {
            println!("  * {key}");
        }
    }

    Ok(())
}
