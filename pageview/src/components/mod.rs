//! Leptos UI components for rendering the homepage.
//!
//! Every component is a pure function of its props: the same content always
//! renders the same markup.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── StatusView (Loading / Error / Loaded without data)
//! └── LandingPage (Loaded with content)
//!     ├── Topbar
//!     ├── HeroSection
//!     ├── MetricsGrid
//!     ├── ServicePillars
//!     ├── IndustryChips
//!     ├── CaseStudies
//!     ├── InsightsList
//!     └── PageFooter
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use pageview_leptos::components::MetricsGrid;
//!
//! view! { <MetricsGrid metrics=content.metrics /> }
//! ```

mod case_studies;
mod document;
mod footer;
mod hero;
mod industries;
mod insights;
mod metrics;
mod page;
mod services;
mod status;
mod topbar;

pub use case_studies::CaseStudies;
pub use document::PageDocument;
pub use footer::{format_updated_at, PageFooter, INVALID_DATE};
pub use hero::HeroSection;
pub use industries::IndustryChips;
pub use insights::InsightsList;
pub use metrics::{bar_width, MetricsGrid};
pub use page::LandingPage;
pub use services::{service_icon, ServicePillars, SERVICE_ICONS};
pub use status::StatusView;
pub use topbar::Topbar;
