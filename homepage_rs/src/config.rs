//! Page configuration.
//!
//! Everything the view needs from its environment is collected here and
//! handed to [`crate::view::PageView::new`] explicitly; nothing below this
//! module reads environment variables.

use chrono::FixedOffset;
use pageview_leptos::RenderOptions;

/// Path of the content endpoint, relative to the API base URL.
pub const HOME_PATH: &str = "/api/home";

/// Inputs for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Normalised API base URL; empty means same origin
    pub api_base_url: String,
    /// Origin used for same-origin requests when the base URL is empty
    pub origin: Option<String>,
    /// Rendering knobs passed through to the renderer
    pub render: RenderOptions,
}

impl Config {
    /// Build a config from raw values, normalising the base URL.
    pub fn new(api_base_url: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            ..Default::default()
        }
    }

    /// Origin for same-origin requests (ignored when a base URL is set).
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        self.origin = origin
            .map(|o| o.trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty());
        self
    }

    /// Offset used to display the footer timestamp.
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.render.utc_offset = utc_offset;
        self
    }

    /// Full URL of the content endpoint.
    ///
    /// `{api_base_url}/api/home`, or `{origin}/api/home` when the base is
    /// empty and an origin is known. Otherwise the path stays relative.
    pub fn endpoint(&self) -> String {
        if !self.api_base_url.is_empty() {
            return format!("{}{}", self.api_base_url, HOME_PATH);
        }
        match &self.origin {
            Some(origin) => format!("{}{}", origin, HOME_PATH),
            None => HOME_PATH.to_string(),
        }
    }
}

/// Trim the configured base URL and drop one trailing slash.
///
/// Absent or blank input yields an empty string (same origin).
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}
