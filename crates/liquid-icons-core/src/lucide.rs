//! Lucide provider: flat `icons/` directory in the `lucide-static` package,
//! with tag metadata in `tags.json` at the package root.

use crate::error::Result;
use crate::iconset::{IconSet, IconSetData, IconSetSpec};
use std::path::Path;

const SPEC: IconSetSpec = IconSetSpec {
    set: "lucide",
    package: "lucide-static",
    variants: &[("default", "icons")],
    tags_file: Some("tags.json"),
};

#[derive(Debug)]
pub struct Lucide {
    data: IconSetData,
}

impl Lucide {
    pub fn new(search_root: &Path, variant: Option<&str>) -> Result<Self> {
        Ok(Self {
            data: SPEC.load(search_root, variant)?,
        })
    }
}

impl IconSet for Lucide {
    fn data(&self) -> &IconSetData {
        &self.data
    }

    fn name(&self) -> &'static str {
        SPEC.set
    }

    fn supports_tags(&self) -> bool {
        true
    }
}
