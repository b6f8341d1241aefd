//! Minimal status markup for the non-content phases.

use leptos::prelude::*;

/// Centered status line; styled red when `error` is set.
#[component]
pub fn StatusView(
    /// Text to show
    #[prop(into)]
    message: String,
    /// Render with error styling
    #[prop(default = false)]
    error: bool,
) -> impl IntoView {
    let class = if error { "status error" } else { "status" };

    view! { <main class=class>{message}</main> }
}
