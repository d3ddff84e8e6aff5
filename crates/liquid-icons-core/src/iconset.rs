//! The polymorphic icon-set abstraction.
//!
//! Every supported icon library exposes the same contract (list icon names,
//! fetch raw markup, list variants, query tags) over heterogeneous on-disk
//! layouts: a flat `icons/` directory vs. size/style subdirectories, tag
//! metadata present or absent. A provider is described by an [`IconSetSpec`]
//! and loaded into an immutable [`IconSetData`]; the [`IconSet`] trait layers
//! the shared operations on top.

use crate::error::{IconsError, Result};
use crate::matcher::{self, DEFAULT_SUGGESTIONS};
use crate::resolver::resolve_package_dir;
use crate::svg;
use crate::tags::{self, TagMap};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Static description of a provider: where its assets live and how its
/// variants map to subdirectories. Loading happens separately, so a bad
/// install surfaces as an ordinary `Result`, not a panic mid-construction.
pub struct IconSetSpec {
    /// Registry identifier, used in error messages ("lucide", "heroicons").
    pub set: &'static str,
    /// npm package the assets ship in.
    pub package: &'static str,
    /// Variant key to subdirectory, in declaration order. Must contain
    /// a `"default"` key.
    pub variants: &'static [(&'static str, &'static str)],
    /// Tag metadata file relative to the package root, for providers that
    /// ship one.
    pub tags_file: Option<&'static str>,
}

impl IconSetSpec {
    /// Resolve the installed package and eagerly load icon names (and tags,
    /// when the provider ships them) for the requested variant.
    pub fn load(&self, search_root: &Path, variant: Option<&str>) -> Result<IconSetData> {
        let variants: IndexMap<String, String> = self
            .variants
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let selected = variant.unwrap_or("default");
        let subpath = variants
            .get(selected)
            .ok_or_else(|| IconsError::UnknownVariant {
                set: self.set.to_string(),
                variant: selected.to_string(),
            })?
            .clone();

        let package_dir = resolve_package_dir(search_root, self.package)?;

        let icons_dir = package_dir.join(&subpath);
        let icon_names = scan_icon_names(&icons_dir)?;

        let (tag_map, tag_names) = match self.tags_file {
            Some(file) => {
                let map = tags::load_tag_map(&package_dir.join(file))?;
                let names = tags::tag_names_from(&map);
                (map, names)
            }
            None => (TagMap::new(), Vec::new()),
        };

        Ok(IconSetData {
            package_dir,
            variants,
            selected_variant: selected.to_string(),
            icon_names,
            tag_map,
            tag_names,
        })
    }
}

/// List `*.svg` filenames (extension stripped) in `dir`, sorted for
/// deterministic output across filesystems.
fn scan_icon_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(IconsError::IconsDirNotFound(dir.to_path_buf()));
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension() == Some(std::ffi::OsStr::new("svg")))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    Ok(names)
}

// ---------------------------------------------------------------------------
// Loaded state
// ---------------------------------------------------------------------------

/// A fully-loaded, immutable view of one provider's assets for one selected
/// variant. Never mutated after construction.
#[derive(Debug)]
pub struct IconSetData {
    package_dir: PathBuf,
    variants: IndexMap<String, String>,
    selected_variant: String,
    icon_names: Vec<String>,
    tag_map: TagMap,
    tag_names: Vec<String>,
}

impl IconSetData {
    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    pub fn variants(&self) -> &IndexMap<String, String> {
        &self.variants
    }

    pub fn selected_variant(&self) -> &str {
        &self.selected_variant
    }

    pub fn icon_names(&self) -> &[String] {
        &self.icon_names
    }

    pub fn tag_map(&self) -> &TagMap {
        &self.tag_map
    }

    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Uniform contract over icon providers.
///
/// Name-existence checks in [`get_icon`](IconSet::get_icon) are
/// case-sensitive, because filenames on disk are, while
/// [`find_exact_match`](IconSet::find_exact_match),
/// [`find_similar`](IconSet::find_similar), and tag lookups are forgiving
/// and case-insensitive. That asymmetry is deliberate: "can we read this
/// file" versus "did the user mean X".
pub trait IconSet: std::fmt::Debug {
    fn data(&self) -> &IconSetData;

    /// Registry identifier for this set.
    fn name(&self) -> &'static str;

    /// Whether this provider ships tag metadata.
    fn supports_tags(&self) -> bool {
        false
    }

    /// Fetch an icon's inner markup (outer `<svg>` wrapper stripped).
    ///
    /// `variant` overrides the selected variant and must be a known key.
    fn get_icon(&self, icon: &str, variant: Option<&str>) -> Result<String> {
        let data = self.data();

        if !data.icon_names.iter().any(|n| n == icon) {
            return Err(IconsError::IconNotFound(icon.to_string()));
        }

        let key = variant.unwrap_or(&data.selected_variant);
        let subpath = data
            .variants
            .get(key)
            .ok_or_else(|| IconsError::UnknownVariant {
                set: self.name().to_string(),
                variant: key.to_string(),
            })?;

        let path = data.package_dir.join(subpath).join(format!("{icon}.svg"));
        let raw = std::fs::read_to_string(&path).map_err(|source| IconsError::IconRead {
            icon: icon.to_string(),
            source,
        })?;

        svg::extract_inner(&raw, icon)
    }

    /// Case-insensitive exact lookup, original casing preserved.
    fn find_exact_match(&self, needle: &str) -> Option<&str> {
        matcher::find_exact_match(&self.data().icon_names, needle)
    }

    /// Substring-then-fuzzy suggestions, capped at the conventional limit.
    fn find_similar(&self, needle: &str) -> Vec<&str> {
        matcher::find_similar(&self.data().icon_names, needle, DEFAULT_SUGGESTIONS)
    }

    /// Variant keys in declaration order.
    fn get_variants(&self) -> Vec<&str> {
        self.data().variants.keys().map(String::as_str).collect()
    }

    /// All known tags, sorted. Empty for providers without tag metadata.
    fn get_tags(&self) -> &[String] {
        self.data().tag_names()
    }

    /// Icons carrying `tag` (case-insensitive), in tag-map order. Empty, not
    /// an error, when tags are unsupported or nothing matches.
    fn find_icons_by_tag(&self, tag: &str) -> Vec<&str> {
        let needle = tag.to_lowercase();
        self.data()
            .tag_map
            .iter()
            .filter(|(_, tags)| tags.iter().any(|t| t.to_lowercase() == needle))
            .map(|(icon, _)| icon.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
