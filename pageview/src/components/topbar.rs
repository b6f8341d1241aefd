//! Top bar with brand and in-page navigation

use leptos::prelude::*;

/// In-page anchors, fixed regardless of content.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#industries", "Industries"),
    ("#cases", "Case Studies"),
    ("#insights", "Insights"),
];

/// Brand plus the fixed navigation anchors
#[component]
pub fn Topbar(brand: String) -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="brand">{brand}</div>
            <nav>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <a href=href>{label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
