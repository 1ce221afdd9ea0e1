//! Bar chart of one stats field for one year, drawn with plain HTML.
//!
//! Ranked charts draw one horizontal bar per entry with the label on the
//! left; the months chart draws vertical columns with the month under each.
//! The bar keeps its tooltip caption in the `title` attribute.

use super::LoadingOverlay;
use dioxus::prelude::*;
use gw_core::ChartView;

const CARD_STYLE: &str = "position: relative; padding: 16px 20px; background: #1e293b; border-radius: 12px; min-width: 0;";

/// One drawable bar with its width or height as a percentage of the tallest.
struct BarRow {
    tick: String,
    value: String,
    caption: String,
    percent: f64,
}

fn bar_rows(view: &ChartView) -> Vec<BarRow> {
    let max = view.max_value();
    view.bars
        .iter()
        .map(|bar| BarRow {
            tick: bar.tick_label(view.spec),
            value: view.value_label(bar),
            caption: bar.caption.clone(),
            percent: if max > 0.0 { bar.value / max * 100.0 } else { 0.0 },
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct StatChartProps {
    pub view: ChartView,
}

#[component]
pub fn StatChart(props: StatChartProps) -> Element {
    let view = &props.view;
    let title = format!("{} {}", view.spec.icon, view.spec.title);
    let year = view.year;
    let total = view.total_label();
    let color = view.color();
    let show_values = view.show_value_labels();
    let loading = view.loading;
    let empty = view.is_empty();
    let rows = bar_rows(view);

    let body = if empty {
        rsx! {
            div {
                style: "padding: 40px 0; text-align: center; color: #64748b;",
                "No data"
            }
        }
    } else if view.spec.is_months {
        rsx! {
            div {
                style: "display: flex; align-items: flex-end; gap: 6px; height: 220px; border-bottom: 1px solid #94a3b8;",
                for (i, row) in rows.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        title: "{row.caption}",
                        style: "flex: 1; display: flex; flex-direction: column; justify-content: flex-end; align-items: center; height: 100%;",
                        if show_values {
                            span { style: "font-size: 11px; color: #ffffff;", "{row.value}" }
                        }
                        div {
                            style: "width: 100%; height: {row.percent}%; background: {color}; border-radius: 4px 4px 0 0;",
                        }
                        span { style: "font-size: 12px; color: #94a3b8; margin-top: 4px;", "{row.tick}" }
                    }
                }
            }
        }
    } else {
        rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for (i, row) in rows.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        title: "{row.caption}",
                        style: "display: flex; align-items: center; gap: 8px;",
                        span {
                            style: "flex: 0 0 140px; font-size: 13px; color: #94a3b8; white-space: nowrap; overflow: hidden;",
                            "{row.tick}"
                        }
                        div {
                            style: "flex: 1; display: flex; align-items: center; gap: 6px;",
                            div {
                                style: "width: {row.percent}%; height: 18px; background: {color}; border-radius: 0 4px 4px 0;",
                            }
                            if show_values {
                                span { style: "font-size: 12px; color: #ffffff;", "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: CARD_STYLE,
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 12px;",
                h3 { style: "margin: 0; font-size: 16px; color: #f8fafc;", "{title}" }
                span { style: "font-size: 13px; color: {color};", "{year} · {total}" }
            }
            {body}
            if loading {
                LoadingOverlay {}
            }
        }
    }
}
