//! Render a sample homepage without the API.
//!
//! Run with: `cargo run -p pageview-leptos --example static_page > page.html`

use pageview_leptos::state::ViewState;
use pageview_leptos::types::{CaseStudy, Hero, Metric, PageContent, ServicePillar};
use pageview_leptos::{render_page, RenderOptions};

fn main() {
    let content = PageContent {
        brand: "Acme".into(),
        hero: Hero {
            title: "Product engineering with AI at the core".into(),
            subtitle: "Strategy, design and delivery in one team.".into(),
            cta_primary: "Start a project".into(),
            cta_secondary: "Explore services".into(),
        },
        metrics: vec![
            Metric { label: "Uptime".into(), value: "99.9%".into() },
            Metric { label: "Releases per week".into(), value: "40".into() },
        ],
        service_pillars: vec![ServicePillar {
            title: "Platform engineering".into(),
            description: "Cloud foundations that scale with the product.".into(),
        }],
        industries: vec!["Fintech".into(), "Healthcare".into()],
        case_studies: vec![CaseStudy {
            title: "Payments modernisation".into(),
            result: "Checkout latency down 60%".into(),
        }],
        insights: vec!["Evaluation pipelines beat prompt tweaking".into()],
        updated_at: "2024-01-01T00:00:00Z".into(),
    };

    let html = render_page(&ViewState::Loaded(Some(content)), &RenderOptions::default());
    println!("{html}");
}
