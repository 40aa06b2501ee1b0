use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RewriterError>;

#[derive(Error, Debug)]
pub enum RewriterError {
    #[error("Invalid input root: {0}")]
    InvalidRoot(String),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "source and destination overrides must be passed in pairs \
         ({sources} sources, {destinations} destinations)"
    )]
    OverrideMismatch { sources: usize, destinations: usize },

    #[error("ambiguous header basename '{basename}': {kept} shadows {shadowed}")]
    AmbiguousBasename {
        basename: String,
        kept: String,
        shadowed: String,
    },
}
