use std::{error::Error, fmt::Display, sync::Arc};

use log::error;
use reqwest::Client;

pub struct ManifestFetcher {
    http_client: Arc<Client>,
}

impl ManifestFetcher {
    pub fn new(http_client: Arc<Client>) -> Self {
        Self { http_client }
    }

    pub async fn grab_string(&self, origin: impl AsRef<str>) -> Result<String, FetchError> {
        let response = self.http_client.get(origin.as_ref()).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body)
    }

    /// Download a manifest. Total: every failure comes back as an empty
    /// string, which downstream treats the same as absent input.
    pub async fn download_manifest(&self, origin: impl AsRef<str>) -> String {
        let origin = origin.as_ref();
        if origin.trim().is_empty() {
            error!("Incorrect content/playlist URL: {}", origin);
            return String::new();
        }

        match self.grab_string(origin).await {
            Ok(playlist) => playlist,
            Err(e) => {
                error!("Playlist download error: {}", e);
                String::new()
            }
        }
    }
}

#[derive(Debug)]
pub enum FetchError {
    RequestError(reqwest::Error),
    RequestNotSuccess(u16),
    EmptyBody,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestError(e) => e.fmt(f),
            Self::RequestNotSuccess(status_code) => {
                write!(f, "Server respond with status code {}", status_code)
            }
            Self::EmptyBody => write!(f, "Server respond with an empty body"),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Client;

    use crate::fetching::ManifestFetcher;

    #[tokio::test]
    async fn test_blank_url_short_circuits() {
        let fetcher = ManifestFetcher::new(Arc::new(Client::new()));

        // no request goes out for a blank URL
        assert_eq!(fetcher.download_manifest("").await, "");
        assert_eq!(fetcher.download_manifest("   ").await, "");
    }
}
