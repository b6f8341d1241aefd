//! Full landing page for loaded content.

use super::{
    CaseStudies, HeroSection, IndustryChips, InsightsList, MetricsGrid, PageFooter,
    ServicePillars, Topbar,
};
use crate::types::PageContent;
use crate::RenderOptions;
use leptos::prelude::*;

/// Projects every content field onto its section, in page order.
#[component]
pub fn LandingPage(content: PageContent, options: RenderOptions) -> impl IntoView {
    let PageContent {
        brand,
        hero,
        metrics,
        service_pillars,
        industries,
        case_studies,
        insights,
        updated_at,
    } = content;

    view! {
        <div class="page">
            <div class="bg-orb orb-one"></div>
            <div class="bg-orb orb-two"></div>
            <Topbar brand=brand />

            <main>
                <HeroSection hero=hero />
                <MetricsGrid metrics=metrics />
                <ServicePillars pillars=service_pillars />
                <IndustryChips industries=industries />
                <CaseStudies case_studies=case_studies />
                <InsightsList insights=insights />
            </main>

            <PageFooter updated_at=updated_at utc_offset=options.utc_offset />
        </div>
    }
}
