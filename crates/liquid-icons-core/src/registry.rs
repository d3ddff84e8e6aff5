//! Library-identifier to provider dispatch.

use crate::error::{IconsError, Result};
use crate::heroicons::Heroicons;
use crate::iconset::IconSet;
use crate::lucide::Lucide;
use std::path::Path;

/// Build a fresh, fully-loaded icon set for a library argument.
///
/// `library` is either a bare identifier ("lucide") or
/// `"<library>:<variant>"` ("heroicons:20/solid"); the split is on the first
/// colon. Unknown libraries fail here; unknown variants fail inside the
/// provider's own construction.
pub fn get_icon_set(search_root: &Path, library: &str) -> Result<Box<dyn IconSet>> {
    let (name, variant) = match library.split_once(':') {
        Some((name, variant)) => (name, Some(variant)),
        None => (library, None),
    };

    match name {
        "lucide" => Ok(Box::new(Lucide::new(search_root, variant)?)),
        "heroicons" => Ok(Box::new(Heroicons::new(search_root, variant)?)),
        _ => Err(IconsError::UnknownIconSet(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn install_both(dir: &TempDir) {
        let lucide = dir.path().join("node_modules/lucide-static");
        std::fs::create_dir_all(lucide.join("icons")).unwrap();
        std::fs::write(
            lucide.join("icons/menu.svg"),
            "<svg><path d=\"M4 5h16\"/></svg>",
        )
        .unwrap();
        std::fs::write(lucide.join("tags.json"), r#"{"menu": ["nav"]}"#).unwrap();

        let hero = dir.path().join("node_modules/heroicons");
        for variant in ["16/solid", "20/solid", "24/solid", "24/outline"] {
            let vdir = hero.join(variant);
            std::fs::create_dir_all(&vdir).unwrap();
            std::fs::write(vdir.join("bell.svg"), "<svg><path d=\"M1 2\"/></svg>").unwrap();
        }
    }

    #[test]
    fn dispatches_bare_identifiers() {
        let dir = TempDir::new().unwrap();
        install_both(&dir);

        assert_eq!(get_icon_set(dir.path(), "lucide").unwrap().name(), "lucide");
        assert_eq!(
            get_icon_set(dir.path(), "heroicons").unwrap().name(),
            "heroicons"
        );
    }

    #[test]
    fn splits_variant_suffix_on_first_colon() {
        let dir = TempDir::new().unwrap();
        install_both(&dir);

        let set = get_icon_set(dir.path(), "heroicons:20/solid").unwrap();
        assert_eq!(set.data().selected_variant(), "20/solid");
    }

    #[test]
    fn unknown_library_fails() {
        let dir = TempDir::new().unwrap();
        let err = get_icon_set(dir.path(), "feather").unwrap_err();
        assert!(matches!(err, IconsError::UnknownIconSet(n) if n == "feather"));
    }

    #[test]
    fn unknown_variant_fails_during_construction() {
        let dir = TempDir::new().unwrap();
        install_both(&dir);

        let err = get_icon_set(dir.path(), "heroicons:48/solid").unwrap_err();
        assert!(matches!(err, IconsError::UnknownVariant { .. }));
    }
}
