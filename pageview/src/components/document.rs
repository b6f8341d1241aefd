//! Root document component - the complete HTML page for any lifecycle phase.

use super::{LandingPage, StatusView};
use crate::state::{ViewState, LOADING_MESSAGE, NO_DATA_MESSAGE};
use crate::styles::PAGE_CSS;
use crate::RenderOptions;
use leptos::prelude::*;

const FALLBACK_TITLE: &str = "Homepage";

/// The complete HTML document for the current view state.
#[component]
pub fn PageDocument(state: ViewState, options: RenderOptions) -> impl IntoView {
    let title = state
        .content()
        .map(|content| content.brand.clone())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let body = match state {
        ViewState::Loading => view! { <StatusView message=LOADING_MESSAGE /> }.into_any(),
        ViewState::Error(message) => view! { <StatusView message=message error=true /> }.into_any(),
        ViewState::Loaded(None) => {
            view! { <StatusView message=NO_DATA_MESSAGE error=true /> }.into_any()
        }
        ViewState::Loaded(Some(content)) => {
            view! { <LandingPage content=content options=options /> }.into_any()
        }
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>{body}</body>
        </html>
    }
}
