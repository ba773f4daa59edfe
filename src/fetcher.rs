use crate::error::ApodError;
use crate::results::PageResponse;
use reqwest::{Client, StatusCode};

/// Statuses that carry a page worth parsing
const USABLE_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::NO_CONTENT];

/// Fetches the APOD page with a single GET request.
///
/// Transport errors and statuses other than 200/204 are returned as errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<PageResponse, ApodError> {
    ::log::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ApodError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    ::log::info!("Http Status : {}", status.as_u16());

    if !USABLE_STATUSES.contains(&status) {
        return Err(ApodError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ApodError::Transport {
            url: url.to_string(),
            source,
        })?;

    ::log::debug!("Fetched {} bytes of HTML from {}", body.len(), url);
    Ok(PageResponse::new(status.as_u16(), body))
}
