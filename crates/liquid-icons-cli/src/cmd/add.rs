use crate::output::print_json;
use anyhow::Context;
use liquid_icons_core::{io, registry, snippet, IconSet, IconsError};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct AddOptions {
    pub dir: String,
    pub prefix: String,
    pub force: bool,
}

/// Convert a batch of icon names into Liquid snippet files.
///
/// Icons are processed strictly in input order. Per-icon failures (unknown
/// name, existing output without --force, read errors) are reported and
/// counted without aborting the rest of the batch; only library/variant
/// resolution failures abort the whole command.
pub fn run(
    root: &Path,
    library: &str,
    icons: &[String],
    options: &AddOptions,
    json: bool,
) -> anyhow::Result<()> {
    let set = registry::get_icon_set(root, library)
        .with_context(|| format!("failed to load icon set '{library}'"))?;

    // Relative --dir resolves against the working directory, the theme root.
    let snippets_dir = PathBuf::from(&options.dir);
    if !snippets_dir.exists() {
        println!("Creating {} directory...", options.dir);
    }
    io::ensure_dir(&snippets_dir).context("failed to create snippets directory")?;

    let mut written: Vec<String> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for icon in icons {
        let start = Instant::now();

        let markup = match set.get_icon(icon, None) {
            Ok(markup) => markup,
            Err(IconsError::IconNotFound(_)) => {
                eprintln!("error: icon \"{icon}\" not found");
                let similar = set.find_similar(icon);
                if !similar.is_empty() {
                    eprintln!("  Did you mean: {}?", similar.join(", "));
                }
                failed.push(icon.clone());
                continue;
            }
            Err(e) => {
                eprintln!("error: processing \"{icon}\": {e}");
                failed.push(icon.clone());
                continue;
            }
        };

        let filename = format!("{}{icon}.liquid", options.prefix);
        let path = snippets_dir.join(&filename);
        let content = snippet::generate(&markup, icon);

        let outcome = if options.force {
            io::atomic_write(&path, content.as_bytes()).map(|()| true)
        } else {
            io::write_if_missing(&path, content.as_bytes())
        };

        match outcome {
            Ok(true) => {
                let ms = start.elapsed().as_secs_f64() * 1000.0;
                tracing::debug!(icon = %icon, file = %path.display(), "wrote snippet");
                println!("[{ms:.2} ms] {filename}");
                written.push(filename);
            }
            Ok(false) => {
                eprintln!(
                    "error: {} already exists (use --force to overwrite)",
                    path.display()
                );
                failed.push(icon.clone());
            }
            Err(e) => {
                eprintln!("error: writing \"{icon}\": {e}");
                failed.push(icon.clone());
            }
        }
    }

    if json {
        return print_json(&serde_json::json!({
            "added": written,
            "failed": failed,
        }));
    }

    let suffix = if failed.is_empty() {
        String::new()
    } else {
        format!(", {} failed", failed.len())
    };
    println!("\nDone! Added {} icon(s){suffix}.", written.len());
    Ok(())
}
