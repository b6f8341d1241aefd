//! # pageview-leptos
//!
//! Leptos SSR renderer for the API-driven homepage.
//!
//! The page content arrives as one JSON document from the homepage API. This
//! crate owns everything downstream of the fetch: the payload types, the
//! three-phase [`ViewState`](state::ViewState) and the components that project
//! it onto HTML. Rendering is a pure function of its input; the fetch itself
//! lives in the `homepage` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use pageview_leptos::{render_page, RenderOptions};
//! use pageview_leptos::state::ViewState;
//! use pageview_leptos::types::PageContent;
//!
//! let content = PageContent {
//!     brand: "Acme".into(),
//!     updated_at: "2024-01-01T00:00:00Z".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_page(&ViewState::Loaded(Some(content)), &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Acme"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Payload structures (`PageContent` and friends)
//! - [`state`] - Lifecycle enum and status messages
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Pages are produced with Leptos 0.8's `RenderHtml` trait. No reactive
//! runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod state;
pub mod styles;
pub mod types;

use chrono::{FixedOffset, Offset, Utc};
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use state::ViewState;

/// Render the complete HTML document for a view state.
///
/// Every phase produces a full document: a status line for `Loading`,
/// `Error` and `Loaded(None)`, the landing page for loaded content.
///
/// # Example
///
/// ```rust
/// use pageview_leptos::{render_page, RenderOptions};
/// use pageview_leptos::state::ViewState;
///
/// let html = render_page(&ViewState::Loading, &RenderOptions::default());
/// assert!(html.contains("Loading website data..."));
/// ```
pub fn render_page(state: &ViewState, options: &RenderOptions) -> String {
    let doc = view! {
        <PageDocument state=state.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Rendering knobs that are not part of the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Offset used to display `updatedAt` (the viewer's local zone)
    pub utc_offset: FixedOffset,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}
