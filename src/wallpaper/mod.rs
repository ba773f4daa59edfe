pub mod unsupported;
pub mod windows;

pub use unsupported::UnsupportedPlatformStub;
pub use windows::{WallpaperApi, WindowsBackgroundSetter};

use crate::error::ApodError;
use crate::results::BackgroundOutcome;
use std::path::Path;

/// A way of turning a saved picture into the desktop background
pub trait BackgroundSetter {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Apply the picture at `path`.
    ///
    /// An absent path is not an error: it is logged and nothing is changed.
    fn set_background(&self, path: Option<&Path>) -> Result<BackgroundOutcome, ApodError>;
}

/// Picks the setter for the platform this binary was built for
pub fn platform_setter() -> Box<dyn BackgroundSetter> {
    ::log::info!("Current platform : {}", std::env::consts::OS);

    #[cfg(windows)]
    {
        Box::new(WindowsBackgroundSetter::new(windows::User32))
    }

    #[cfg(not(windows))]
    {
        Box::new(UnsupportedPlatformStub::new(std::env::consts::OS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_platform_setter_is_stub_off_windows() {
        let setter = platform_setter();
        assert_eq!(setter.name(), "unsupported");
        let outcome = setter
            .set_background(Some(Path::new("foo.jpg")))
            .unwrap();
        assert!(matches!(outcome, BackgroundOutcome::Skipped { .. }));
    }

    #[cfg(windows)]
    #[test]
    fn test_platform_setter_is_windows() {
        assert_eq!(platform_setter().name(), "windows");
    }
}
