//! Application state managed via Dioxus context.
//!
//! `AppState` holds the dashboard view model and the HTTP client in signals.
//! Components read the dashboard to render and send it events through
//! [`AppState::dispatch`]; fetches run in spawned tasks and report back
//! through [`Dashboard::apply`], which drops answers for deselected years.

use dioxus::prelude::*;
use gw_core::{Config, Dashboard, Event, FetchTicket, StatsClient, YearRange};

#[derive(Clone, Copy)]
pub struct AppState {
    pub dashboard: Signal<Dashboard>,
    pub client: Signal<StatsClient>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::from_build_env();
        log::info!("Using stats backend at {}", config.api_url());
        Self {
            dashboard: Signal::new(Dashboard::new(YearRange::through_current_year())),
            client: Signal::new(StatsClient::new(&config)),
        }
    }

    /// Kick off the initial fetch of the primary year.
    pub fn start(self) {
        let mut dashboard = self.dashboard;
        let ticket = dashboard.write().start();
        self.fetch(ticket);
    }

    pub fn dispatch(self, event: Event) {
        let mut dashboard = self.dashboard;
        let result = dashboard.write().handle(event);
        match result {
            Ok(Some(ticket)) => self.fetch(ticket),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring {:?}: {}", event, e),
        }
    }

    fn fetch(self, ticket: FetchTicket) {
        let client = self.client.peek().clone();
        let mut dashboard = self.dashboard;
        spawn(async move {
            let result = client.fetch_year_stats(ticket.year).await;
            dashboard.write().apply(ticket, result);
        });
    }

    pub fn api_url(&self) -> String {
        self.client.read().api_url().to_string()
    }
}
