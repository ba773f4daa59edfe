use super::BackgroundSetter;
use crate::error::ApodError;
use crate::results::BackgroundOutcome;
use std::path::Path;

/// Stand-in for platforms without wallpaper support. Never touches the OS.
#[derive(Debug, Clone)]
pub struct UnsupportedPlatformStub {
    platform: String,
}

impl UnsupportedPlatformStub {
    pub fn new(platform: &str) -> Self {
        Self {
            platform: platform.to_string(),
        }
    }
}

impl BackgroundSetter for UnsupportedPlatformStub {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn set_background(&self, path: Option<&Path>) -> Result<BackgroundOutcome, ApodError> {
        ::log::warn!(
            "Setting the desktop background only works on Windows, not on {}",
            self.platform
        );
        if let Some(path) = path {
            ::log::info!("Image left at {}", path.display());
        }
        Ok(BackgroundOutcome::skipped(format!(
            "unsupported platform: {}",
            self.platform
        )))
    }
}
