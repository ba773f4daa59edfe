use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the APOD pipeline.
#[derive(Debug, Error)]
pub enum ApodError {
    /// Network or protocol failure while talking to the APOD server.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a status we can use.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The page had no anchor wrapping an image with a usable extension.
    #[error("no image link found on {url}")]
    NoImageLink { url: String },

    /// A candidate image URL did not end in a supported extension.
    #[error("not an image URL: {0}")]
    InvalidImageUrl(String),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operating system refused to change the wallpaper.
    #[error("could not set desktop background to {path}")]
    WallpaperFailed { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApodError {
    /// Process exit status for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApodError::Transport { .. } | ApodError::UnexpectedStatus { .. } => 2,
            ApodError::NoImageLink { .. } | ApodError::InvalidImageUrl(_) => 3,
            ApodError::Io { .. } => 4,
            ApodError::WallpaperFailed { .. } => 5,
            ApodError::Config(_) => 1,
        }
    }
}

impl From<serde_json::Error> for ApodError {
    fn from(err: serde_json::Error) -> Self {
        ApodError::Config(err.to_string())
    }
}

impl From<url::ParseError> for ApodError {
    fn from(err: url::ParseError) -> Self {
        ApodError::Config(err.to_string())
    }
}
