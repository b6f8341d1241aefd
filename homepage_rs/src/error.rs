//! Fetch errors.
//!
//! All variants reach the user as the same message
//! ([`FETCH_FAILED_MESSAGE`](pageview_leptos::state::FETCH_FAILED_MESSAGE));
//! the variant only shows up in logs.

use thiserror::Error;

/// Why the content fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, invalid URL or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body is not a page content document
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
}
