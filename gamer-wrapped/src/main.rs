//! GamerWrapped dashboard
//!
//! Year-in-review charts of gaming stats served by the GamerWrapped backend.
//!
//! Data flow:
//! 1. On mount: the primary year (2024 by default) is fetched from
//!    `/api/stats`.
//! 2. Header buttons turn into dashboard events; each event that changes a
//!    year spawns a fetch tagged with a ticket.
//! 3. Finished fetches are applied to the dashboard; answers for years that
//!    are no longer selected are dropped.
//! 4. Interactive mode draws the charts from the fetched stats; export mode
//!    shows the server-rendered chart images instead.

mod components;
mod state;

use components::{ChartPairView, Controls, ExportCard};
use dioxus::prelude::*;
use gw_core::{DashboardView, Orientation};
use state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gamer-wrapped-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Runs once: start() only writes to the dashboard, it never subscribes.
    use_effect(move || state.start());

    let api_url = state.api_url();
    let (view, caption, orientation) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.view(&api_url),
            dashboard.view_mode().caption(),
            dashboard.orientation(),
        )
    };

    let body = match view {
        DashboardView::Interactive(pairs) => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                for pair in pairs {
                    ChartPairView { key: "{pair.primary.spec.id}", pair: pair.clone() }
                }
            }
        },
        DashboardView::Export(charts) => {
            let columns = match orientation {
                Orientation::Portrait => "repeat(3, 1fr)",
                Orientation::Landscape => "repeat(2, 1fr)",
            };
            rsx! {
                div {
                    style: "display: grid; grid-template-columns: {columns}; gap: 16px;",
                    for chart in charts {
                        ExportCard { key: "{chart.spec.id}", chart: chart.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; padding: 24px; background: #0f172a; color: #e2e8f0; font-family: sans-serif;",
            header {
                style: "text-align: center; margin-bottom: 32px;",
                h1 {
                    style: "margin: 0; font-size: 40px; letter-spacing: 2px;",
                    "GAMER"
                    span { style: "color: #fca311;", "WRAPPED" }
                }
                Controls {}
            }
            main { {body} }
            footer {
                style: "margin-top: 32px; text-align: center; font-size: 13px; color: #64748b;",
                p { "{caption}" }
            }
        }
    }
}
