use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconsError {
    #[error("unknown icon set: {0}")]
    UnknownIconSet(String),

    #[error("unknown variant '{variant}' for icon set '{set}'")]
    UnknownVariant { set: String, variant: String },

    #[error("icon \"{0}\" not found")]
    IconNotFound(String),

    #[error("could not locate installed package '{0}': is it in node_modules?")]
    PackageNotFound(String),

    #[error("icons directory not found: {}", .0.display())]
    IconsDirNotFound(PathBuf),

    #[error("invalid tag map: {0}")]
    InvalidTagMap(String),

    #[error("cannot read tag map at {}: {source}", .path.display())]
    TagMapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read icon '{icon}': {source}")]
    IconRead {
        icon: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing SVG for icon '{0}'")]
    SvgParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IconsError>;
