//! APOD Wallpaper
//!
//! Download NASA's Astronomy Picture of the Day and optionally make it the
//! desktop background.

pub mod config;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod parsers;
pub mod results;
pub mod utils;
pub mod wallpaper;

// Re-export commonly used types for convenience
pub use config::{APOD_BASE, APOD_HOME, ApodConfig};
pub use error::ApodError;
pub use results::{BackgroundOutcome, ImageReference, PageResponse, RunReport, SavedImage};
pub use wallpaper::{BackgroundSetter, UnsupportedPlatformStub, WindowsBackgroundSetter};

use reqwest::Client;

/// Builder for one download run
pub struct Apod {
    config: ApodConfig,
    save_only: bool,
    setter: Option<Box<dyn BackgroundSetter>>,
    client: Option<Client>,
}

impl Apod {
    /// Create a new run with the given configuration
    pub fn new(config: ApodConfig) -> Self {
        Self {
            config,
            save_only: false,
            setter: None,
            client: None,
        }
    }

    /// Only save the picture, leave the desktop alone
    pub fn with_save_only(mut self, save_only: bool) -> Self {
        self.save_only = save_only;
        self
    }

    /// Use a specific background setter instead of the platform default
    pub fn with_background_setter(mut self, setter: Box<dyn BackgroundSetter>) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Fetch the page, download the picture and, unless saving only, set it
    /// as the background. Stops at the first failing stage.
    pub async fn run(self) -> Result<RunReport, ApodError> {
        self.config.validate()?;

        let client = self.client.unwrap_or_default();
        let home_url = self.config.home_url();

        ::log::info!("Fetching {}", home_url);
        let page = fetcher::fetch_page(&client, &home_url).await?;

        let image_url = parsers::extract_image_url(&page.body, &self.config.base_url)
            .ok_or_else(|| ApodError::NoImageLink {
                url: home_url.clone(),
            })?;

        let saved = downloader::save_image(&client, &image_url, &self.config.output_dir).await?;
        ::log::info!("Image downloaded. Saved path {}", saved.path.display());

        let background = if self.save_only {
            ::log::info!("Save only requested, leaving desktop background unchanged");
            None
        } else {
            ::log::info!("Trying to set desktop background");
            let setter = self.setter.unwrap_or_else(wallpaper::platform_setter);
            ::log::debug!("Using {} background setter", setter.name());
            Some(setter.set_background(Some(&saved.path))?)
        };

        let report = RunReport {
            page_status: page.status,
            image_url,
            saved,
            background,
        };

        match serde_json::to_string(&report) {
            Ok(json) => ::log::debug!("Run report: {}", json),
            Err(e) => ::log::warn!("Could not serialize run report: {}", e),
        }

        Ok(report)
    }
}
