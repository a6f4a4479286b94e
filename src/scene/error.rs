use std::io;
use thiserror::Error;

/// Errors produced while parsing or writing scene files
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("missing '{0}' section")]
    MissingSection(&'static str),

    #[error("'{marker} {declared}' declares more records than the file contains (found {found})")]
    ShortSection {
        marker: &'static str,
        declared: usize,
        found: usize,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
