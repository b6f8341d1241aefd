//! Insights list component

use leptos::prelude::*;

/// "Latest Thoughts and Trends" list, one item per insight
#[component]
pub fn InsightsList(insights: Vec<String>) -> impl IntoView {
    view! {
        <section id="insights">
            <h2>"Latest Thoughts and Trends"</h2>
            <ul class="insights">
                {insights
                    .into_iter()
                    .map(|insight| view! { <li class="insight">{insight}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
