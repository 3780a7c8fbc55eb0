use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A deck needs at least one card")]
    EmptyDeck,

    #[error("Invalid transition duration: {0} (must be a non-negative number of seconds)")]
    InvalidDuration(f32),

    #[error("Expected {expected} icons, one per card, but got {actual}")]
    IconCountMismatch { expected: usize, actual: usize },

    #[error("Config path {0:?} must be a file, not a folder")]
    ConfigIsDirectory(PathBuf),

    #[error("Forecast {0:?} does not contain any periods")]
    EmptyForecast(PathBuf),

    #[error("No image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("Failed to load image {path:?}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
