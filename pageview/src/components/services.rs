//! Service pillar cards

use crate::types::ServicePillar;
use leptos::prelude::*;

/// Icon classes cycled across the pillar cards.
pub const SERVICE_ICONS: [&str; 4] = ["stack", "signal", "route", "shield"];

/// Icon class for the pillar at `index`.
pub fn service_icon(index: usize) -> &'static str {
    SERVICE_ICONS[index % SERVICE_ICONS.len()]
}

/// One card per service pillar, each with a cycled icon class
#[component]
pub fn ServicePillars(pillars: Vec<ServicePillar>) -> impl IntoView {
    view! {
        <section id="services">
            <h2>"Service Pillars"</h2>
            <div class="grid">
                {pillars.into_iter().enumerate().map(|(index, pillar)| {
                    let icon_class = format!("service-icon {}", service_icon(index));
                    view! {
                        <article class="card pillar-card">
                            <div class=icon_class></div>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.description}</p>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_cycle_every_four_pillars() {
        let icons: Vec<_> = (0..9).map(service_icon).collect();
        assert_eq!(
            icons,
            vec!["stack", "signal", "route", "shield", "stack", "signal", "route", "shield", "stack"]
        );
    }
}
