use crate::error::ApodError;
use crate::results::{ImageReference, SavedImage};
use crate::utils::is_plain_filename;
use reqwest::Client;
use std::path::Path;

/// Downloads `image` and writes the body into `output_dir`.
///
/// The file is named after the last path segment of the URL and replaces any
/// existing file of that name. Names that would escape `output_dir` are
/// rejected before any request is made. The bytes are written exactly as received.
pub async fn save_image(
    client: &Client,
    image: &ImageReference,
    output_dir: &Path,
) -> Result<SavedImage, ApodError> {
    let filename = image.filename().to_string();
    ::log::info!("Image name : {}", filename);

    if !is_plain_filename(&filename) {
        return Err(ApodError::InvalidImageUrl(image.to_string()));
    }

    let transport = |source| ApodError::Transport {
        url: image.to_string(),
        source,
    };

    let response = client.get(image.as_str()).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApodError::UnexpectedStatus {
            url: image.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(transport)?;

    let path = output_dir.join(&filename);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ApodError::Io {
            path: path.clone(),
            source,
        })?;

    ::log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(SavedImage {
        filename,
        path,
        bytes: bytes.len() as u64,
    })
}
