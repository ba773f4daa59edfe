use crate::error::ApodError;
use crate::utils::{filename_from_url, join_link};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Extensions accepted as a full-resolution picture link
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Represents the fetched APOD page
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status code of the response
    pub status: u16,

    /// Raw HTML text
    pub body: String,
}

impl PageResponse {
    /// Create a new page response
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }
}

/// URL of a linked picture.
///
/// Always ends in one of [`IMAGE_EXTENSIONS`], matched case-sensitively, except
/// for links found on a page, where the check applies to the link itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageReference(String);

impl ImageReference {
    /// Wrap a URL, rejecting anything without an image extension
    pub fn new(url: impl Into<String>) -> Result<Self, ApodError> {
        let url = url.into();
        if has_image_extension(&url) {
            Ok(Self(url))
        } else {
            Err(ApodError::InvalidImageUrl(url))
        }
    }

    /// Join a page link onto `base_url`, checking the link rather than the result.
    ///
    /// A link without any `.` is compared whole, so `jpg` qualifies even though
    /// the joined URL's last `.` belongs to the host name.
    pub(crate) fn from_link(base_url: &str, href: &str) -> Result<Self, ApodError> {
        if has_image_extension(href) {
            Ok(Self(join_link(base_url, href)))
        } else {
            Err(ApodError::InvalidImageUrl(href.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name the image is saved under: the last `/` segment of the URL
    pub fn filename(&self) -> &str {
        filename_from_url(&self.0)
    }
}

impl TryFrom<String> for ImageReference {
    type Error = ApodError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::new(url)
    }
}

impl From<ImageReference> for String {
    fn from(image: ImageReference) -> Self {
        image.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether the text after the last `.` is a supported image extension.
///
/// Text without any `.` is compared whole.
pub fn has_image_extension(link: &str) -> bool {
    let extension = link.rsplit('.').next().unwrap_or(link);
    IMAGE_EXTENSIONS.contains(&extension)
}

/// A picture written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    /// File name derived from the image URL
    pub filename: String,

    /// Location the bytes were written to
    pub path: PathBuf,

    /// Number of bytes written
    pub bytes: u64,
}

/// What happened when asked to change the desktop background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BackgroundOutcome {
    /// The wallpaper was changed
    Applied,

    /// Nothing was changed, and that is not an error
    Skipped { reason: String },
}

impl BackgroundOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        BackgroundOutcome::Skipped {
            reason: reason.into(),
        }
    }
}

/// Summary of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Status of the APOD page request
    pub page_status: u16,

    /// Link that was downloaded
    pub image_url: ImageReference,

    /// Where the picture ended up
    pub saved: SavedImage,

    /// `None` when run with `--save-only`
    pub background: Option<BackgroundOutcome>,
}
