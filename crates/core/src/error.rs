//! Error types
//!
//! Diffing, statistics and string exports are total. Only configuration
//! parsing and writing exports to disk can fail.

use std::path::PathBuf;

/// Errors surfaced by the fallible edges of the crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing an export to disk failed
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document could not be parsed
    #[error("invalid diff configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
