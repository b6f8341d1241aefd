//! Industry chips

use leptos::prelude::*;

/// Inline chip per industry
#[component]
pub fn IndustryChips(industries: Vec<String>) -> impl IntoView {
    view! {
        <section id="industries">
            <h2>"Industries"</h2>
            <div class="chips">
                {industries
                    .into_iter()
                    .map(|industry| view! { <span class="chip">{industry}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
