//! # homepage
//!
//! Fetches the homepage content document from the API and renders it with
//! [`pageview_leptos`].
//!
//! ```rust,no_run
//! use homepage::{Config, PageView};
//!
//! # async fn run() {
//! let config = Config::new(Some("https://api.example.com/"));
//! let mut view = PageView::new(&config);
//! view.load().await;
//! println!("{}", view.render());
//! # }
//! ```
//!
//! The view performs exactly one request to `{apiBaseUrl}/api/home` and ends
//! in one of three renderings: the full page, the generic fetch-failure
//! status, or the "no data" status.

pub mod client;
pub mod config;
pub mod error;
pub mod view;

pub use client::HomeClient;
pub use config::Config;
pub use error::FetchError;
pub use view::PageView;
