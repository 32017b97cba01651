use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing corpora.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A file or directory could not be accessed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file is not a JSON array of `[lyric, artist]` pairs.
    #[error("invalid corpus JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error from the classification core.
    #[error(transparent)]
    Core(#[from] cadence_core::CadenceError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = IngestError::io(
            "songs_train/adele0.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("adele0.txt"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn core_error_is_transparent() {
        let err: IngestError = cadence_core::CadenceError::MissingModel.into();
        assert_eq!(err.to_string(), "no model has been trained yet");
    }
}
