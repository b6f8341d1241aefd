//! Hero section: headline, actions and the decorative health card.

use crate::types::Hero;
use leptos::prelude::*;

/// Hero copy with two inert action buttons.
#[component]
pub fn HeroSection(hero: Hero) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <p class="eyebrow">"AI-First Product Engineering"</p>
                <h1>{hero.title}</h1>
                <p>{hero.subtitle}</p>
                <div class="actions">
                    <button>{hero.cta_primary}</button>
                    <button class="secondary">{hero.cta_secondary}</button>
                </div>
            </div>
            <HeroGraphic />
        </section>
    }
}

#[component]
fn HeroGraphic() -> impl IntoView {
    view! {
        <div class="hero-graphic" aria-hidden="true">
            <div class="ring ring-a"></div>
            <div class="ring ring-b"></div>
            <div class="floating-card">
                <h4>"Platform Health"</h4>
                <div class="bars">
                    <span></span>
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                <p>"99.9% uptime"</p>
            </div>
        </div>
    }
}
