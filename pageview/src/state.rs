//! Page lifecycle state.
//!
//! A page starts in [`ViewState::Loading`] and settles exactly once, either
//! into [`ViewState::Error`] or [`ViewState::Loaded`]. Content can only be
//! reached through the `Loaded` variant.

use crate::types::PageContent;

/// Status text shown while the payload is in flight.
pub const LOADING_MESSAGE: &str = "Loading website data...";

/// Status text shown for any failed fetch (transport, HTTP status or decode).
pub const FETCH_FAILED_MESSAGE: &str = "Could not load page data from the API.";

/// Status text shown when the API answered successfully but sent no data.
pub const NO_DATA_MESSAGE: &str = "No data returned by API.";

/// Lifecycle of a single page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch failed; carries the user-facing message
    Error(String),
    /// Fetch succeeded; `None` when the API returned an empty payload
    Loaded(Option<PageContent>),
}

impl ViewState {
    /// Terminal state for a failed fetch, with the fixed user-facing message.
    pub fn fetch_failed() -> Self {
        ViewState::Error(FETCH_FAILED_MESSAGE.to_string())
    }

    /// Whether the load has settled (error or loaded).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    /// Loaded content, if any.
    pub fn content(&self) -> Option<&PageContent> {
        match self {
            ViewState::Loaded(content) => content.as_ref(),
            _ => None,
        }
    }
}
