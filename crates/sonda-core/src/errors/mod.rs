use std::path::PathBuf;
use thiserror::Error;

/// Fatal inspection failures. Everything else (missing file, missing
/// marker, unparsable span) normalizes to an empty extraction with a
/// [`crate::CacheState`] reason instead of an error.
#[derive(Debug, Error)]
pub enum InspectError {
    /// A file existed but could not be read or decoded as UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The targets file was present but invalid.
    #[error("invalid targets file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl InspectError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}
