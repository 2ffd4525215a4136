//! Error types for dictionary loading and suggestion ranking.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// Ranking was attempted against a vocabulary with no words in it.
    #[error("vocabulary is empty, no suggestion can be ranked")]
    EmptyVocabulary,

    /// A dictionary or snapshot file could not be opened, read or written.
    #[error("failed to access dictionary at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading dictionary text from a stream failed.
    #[error("failed to read dictionary stream: {0}")]
    Read(#[from] io::Error),

    /// A vocabulary snapshot could not be serialised or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = SpellError::io(
            "words.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "failed to access dictionary at words.txt: no such file"
        );
    }
}
