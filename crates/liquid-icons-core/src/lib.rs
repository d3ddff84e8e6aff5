pub mod error;
pub mod heroicons;
pub mod iconset;
pub mod io;
pub mod lucide;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod snippet;
pub mod svg;
pub mod tags;

pub use error::{IconsError, Result};
pub use iconset::{IconSet, IconSetData, IconSetSpec};
