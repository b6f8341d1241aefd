//! Case study cards

use crate::types::CaseStudy;
use leptos::prelude::*;

/// One card per case study, title and result
#[component]
pub fn CaseStudies(case_studies: Vec<CaseStudy>) -> impl IntoView {
    view! {
        <section id="cases">
            <h2>"Case Studies"</h2>
            <div class="grid">
                {case_studies.into_iter().map(|case| {
                    view! {
                        <article class="card case-card">
                            <h3>{case.title}</h3>
                            <p>{case.result}</p>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
