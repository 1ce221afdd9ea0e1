//! Header controls: year, compare year, view mode and export layout.

use super::ToggleButton;
use crate::state::AppState;
use dioxus::prelude::*;
use gw_core::{Event, Orientation, ViewMode, COMPARE_COLOR};

const GROUP_STYLE: &str = "display: flex; flex-direction: column; gap: 6px;";
const LABEL_STYLE: &str = "font-size: 11px; text-transform: uppercase; letter-spacing: 1px; color: #64748b;";
const SELECTOR_STYLE: &str = "display: flex; flex-wrap: wrap; gap: 6px;";

#[component]
pub fn Controls() -> Element {
    let state = use_context::<AppState>();
    let (years, primary, compare, compare_choices, mode, orientation) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.years().years().collect::<Vec<i32>>(),
            dashboard.primary_year(),
            dashboard.compare_year(),
            dashboard.compare_choices(),
            dashboard.view_mode(),
            dashboard.orientation(),
        )
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 24px; margin-top: 16px;",
            div {
                style: GROUP_STYLE,
                span { style: LABEL_STYLE, "Year" }
                div {
                    style: SELECTOR_STYLE,
                    for year in years {
                        ToggleButton {
                            key: "{year}",
                            label: year.to_string(),
                            active: year == primary,
                            onclick: move |_| state.dispatch(Event::SelectPrimaryYear(year)),
                        }
                    }
                }
            }
            if mode == ViewMode::Interactive {
                div {
                    style: GROUP_STYLE,
                    span { style: LABEL_STYLE, "Compare With" }
                    div {
                        style: SELECTOR_STYLE,
                        ToggleButton {
                            label: "None".to_string(),
                            active: compare.is_none(),
                            onclick: move |_| state.dispatch(Event::SelectCompareYear(None)),
                        }
                        for year in compare_choices {
                            ToggleButton {
                                key: "{year}",
                                label: year.to_string(),
                                active: compare == Some(year),
                                accent: COMPARE_COLOR.to_string(),
                                onclick: move |_| state.dispatch(Event::SelectCompareYear(Some(year))),
                            }
                        }
                    }
                }
            }
            div {
                style: GROUP_STYLE,
                span { style: LABEL_STYLE, "View" }
                div {
                    style: SELECTOR_STYLE,
                    for option in [ViewMode::Interactive, ViewMode::Export] {
                        ToggleButton {
                            key: "{option}",
                            label: option.label().to_string(),
                            active: option == mode,
                            onclick: move |_| state.dispatch(Event::SetViewMode(option)),
                        }
                    }
                }
            }
            if mode == ViewMode::Export {
                div {
                    style: GROUP_STYLE,
                    span { style: LABEL_STYLE, "Layout" }
                    div {
                        style: SELECTOR_STYLE,
                        for option in [Orientation::Portrait, Orientation::Landscape] {
                            ToggleButton {
                                key: "{option}",
                                label: option.label().to_string(),
                                active: option == orientation,
                                onclick: move |_| state.dispatch(Event::SetOrientation(option)),
                            }
                        }
                    }
                }
            }
        }
    }
}
