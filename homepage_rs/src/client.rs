//! HTTP access to the homepage content API.

use pageview_leptos::types::{decode_payload, PageContent};
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

/// Thin wrapper over a `reqwest` client issuing the content request.
#[derive(Clone, Debug, Default)]
pub struct HomeClient {
    client: Client,
}

impl HomeClient {
    /// Client with default settings (no timeout, default headers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// `GET` the content document at `url`.
    ///
    /// `Ok(None)` means the API answered 2xx with an empty or falsy body.
    pub async fn fetch_home(&self, url: &str) -> Result<Option<PageContent>, FetchError> {
        debug!(url, "requesting page content");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "page content received");

        Ok(decode_payload(&body)?)
    }
}
