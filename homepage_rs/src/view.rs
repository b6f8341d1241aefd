//! The page view: one fetch, one terminal state, rendered on demand.

use pageview_leptos::state::ViewState;
use pageview_leptos::{render_page, RenderOptions};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::client::HomeClient;
use crate::config::Config;

/// Homepage view bound to one content endpoint.
///
/// Starts in [`ViewState::Loading`]. The first [`load`](PageView::load)
/// performs the only fetch this view will ever make and settles the state;
/// the view never leaves a terminal state.
#[derive(Debug)]
pub struct PageView {
    client: HomeClient,
    endpoint: String,
    render: RenderOptions,
    state: ViewState,
}

impl PageView {
    /// View for `config` with a default HTTP client.
    pub fn new(config: &Config) -> Self {
        Self::with_home_client(config, HomeClient::new())
    }

    /// View for `config` reusing an existing `reqwest` client.
    pub fn with_client(config: &Config, client: Client) -> Self {
        Self::with_home_client(config, HomeClient::with_client(client))
    }

    fn with_home_client(config: &Config, client: HomeClient) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
            render: config.render.clone(),
            state: ViewState::Loading,
        }
    }

    /// URL the view fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch the content once and settle the state.
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies all end in
    /// [`ViewState::Error`] with the fixed fetch-failure message. A 2xx with
    /// an empty payload ends in `Loaded(None)`. Calls after the state has
    /// settled return it unchanged without touching the network.
    pub async fn load(&mut self) -> &ViewState {
        if self.state.is_terminal() {
            debug!(endpoint = %self.endpoint, "page already loaded, skipping fetch");
            return &self.state;
        }

        self.state = match self.client.fetch_home(&self.endpoint).await {
            Ok(Some(content)) => {
                info!(brand = %content.brand, "page content loaded");
                ViewState::Loaded(Some(content))
            }
            Ok(None) => {
                warn!(endpoint = %self.endpoint, "API returned an empty payload");
                ViewState::Loaded(None)
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "failed to load page data");
                ViewState::fetch_failed()
            }
        };

        &self.state
    }

    /// Complete HTML document for the current state.
    pub fn render(&self) -> String {
        render_page(&self.state, &self.render)
    }
}
