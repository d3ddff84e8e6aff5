//! Heroicons provider: size/style variant subdirectories (`16/solid`,
//! `20/solid`, `24/solid`, `24/outline`) in the `heroicons` package. No tag
//! metadata.

use crate::error::Result;
use crate::iconset::{IconSet, IconSetData, IconSetSpec};
use std::path::Path;

const SPEC: IconSetSpec = IconSetSpec {
    set: "heroicons",
    package: "heroicons",
    variants: &[
        ("16/solid", "16/solid"),
        ("20/solid", "20/solid"),
        ("24/solid", "24/solid"),
        ("24/outline", "24/outline"),
        ("default", "24/outline"),
    ],
    tags_file: None,
};

#[derive(Debug)]
pub struct Heroicons {
    data: IconSetData,
}

impl Heroicons {
    pub fn new(search_root: &Path, variant: Option<&str>) -> Result<Self> {
        Ok(Self {
            data: SPEC.load(search_root, variant)?,
        })
    }
}

impl IconSet for Heroicons {
    fn data(&self) -> &IconSetData {
        &self.data
    }

    fn name(&self) -> &'static str {
        SPEC.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconsError;
    use tempfile::TempDir;

    fn install(dir: &TempDir) {
        let pkg = dir.path().join("node_modules/heroicons");
        for variant in ["16/solid", "20/solid", "24/solid", "24/outline"] {
            let vdir = pkg.join(variant);
            std::fs::create_dir_all(&vdir).unwrap();
            std::fs::write(
                vdir.join("bell.svg"),
                format!("<svg><path d=\"{variant}\"/></svg>"),
            )
            .unwrap();
        }
    }

    #[test]
    fn lists_variants_in_declaration_order() {
        let dir = TempDir::new().unwrap();
        install(&dir);

        let hero = Heroicons::new(dir.path(), None).unwrap();
        assert_eq!(
            hero.get_variants(),
            vec!["16/solid", "20/solid", "24/solid", "24/outline", "default"]
        );
        assert!(!hero.supports_tags());
    }

    #[test]
    fn default_variant_reads_24_outline() {
        let dir = TempDir::new().unwrap();
        install(&dir);

        let hero = Heroicons::new(dir.path(), None).unwrap();
        assert_eq!(
            hero.get_icon("bell", None).unwrap(),
            "<path d=\"24/outline\"/>"
        );
    }

    #[test]
    fn explicit_variant_selection() {
        let dir = TempDir::new().unwrap();
        install(&dir);

        let hero = Heroicons::new(dir.path(), Some("20/solid")).unwrap();
        assert_eq!(hero.data().selected_variant(), "20/solid");
        assert_eq!(hero.get_icon("bell", None).unwrap(), "<path d=\"20/solid\"/>");

        // Per-call override beats the selected variant.
        assert_eq!(
            hero.get_icon("bell", Some("16/solid")).unwrap(),
            "<path d=\"16/solid\"/>"
        );
    }

    #[test]
    fn unknown_variant_fails_construction() {
        let dir = TempDir::new().unwrap();
        install(&dir);

        let err = Heroicons::new(dir.path(), Some("32/solid")).unwrap_err();
        assert!(
            matches!(err, IconsError::UnknownVariant { set, variant } if set == "heroicons" && variant == "32/solid")
        );
    }
}
