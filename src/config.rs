use crate::error::ApodError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Base URL of the Astronomy Picture of the Day site
pub const APOD_BASE: &str = "https://apod.nasa.gov/apod/";

/// Page that links today's picture
pub const APOD_PAGE: &str = "astropix.html";

/// Full URL of today's APOD page
pub const APOD_HOME: &str = "https://apod.nasa.gov/apod/astropix.html";

/// Configuration for a single download run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodConfig {
    /// Base URL that image links on the page are relative to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page under `base_url` that links the picture
    #[serde(default = "default_page")]
    pub page: String,

    /// Directory the image is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Default value for base_url
fn default_base_url() -> String {
    APOD_BASE.to_string()
}

/// Default value for page
fn default_page() -> String {
    APOD_PAGE.to_string()
}

/// Default value for output_dir (the current working directory)
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            output_dir: default_output_dir(),
        }
    }
}

impl ApodConfig {
    /// Create a configuration pointing at a different APOD mirror
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Set the directory the image is written into
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// URL of the page to scan for the picture link
    pub fn home_url(&self) -> String {
        format!("{}{}", self.base_url, self.page)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ApodError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| ApodError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| ApodError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ApodError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is absolute and ends in a slash.
    ///
    /// Image links are appended to the base URL verbatim, so a missing
    /// trailing slash would glue the last path segment to the link.
    pub fn validate(&self) -> Result<(), ApodError> {
        let base = Url::parse(&self.base_url)?;
        if base.cannot_be_a_base() || !self.base_url.ends_with('/') {
            return Err(ApodError::Config(format!(
                "base_url must be an absolute URL ending in '/': {}",
                self.base_url
            )));
        }
        if self.page.is_empty() {
            return Err(ApodError::Config("page must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_apod() {
        let config = ApodConfig::default();
        assert_eq!(config.home_url(), APOD_HOME);
        assert_eq!(config.output_dir, PathBuf::from("."));
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ApodConfig::from_json(r#"{"output_dir": "/tmp/apod"}"#).unwrap();
        assert_eq!(config.base_url, APOD_BASE);
        assert_eq!(config.page, APOD_PAGE);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/apod"));
    }

    #[test]
    fn test_from_json_rejects_base_without_slash() {
        let err = ApodConfig::from_json(r#"{"base_url": "https://apod.nasa.gov/apod"}"#)
            .unwrap_err();
        assert!(matches!(err, ApodError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_relative_base() {
        let err = ApodConfig::from_json(r#"{"base_url": "apod/"}"#).unwrap_err();
        assert!(matches!(err, ApodError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let err = ApodConfig::from_json("{not json").unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ApodConfig::from_file("/nonexistent/apod.json").unwrap_err();
        assert!(matches!(err, ApodError::Io { .. }));
    }
}
