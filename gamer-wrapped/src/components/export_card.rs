//! Server-rendered chart image with a download link.

use dioxus::prelude::*;
use gw_core::ExportChart;

#[derive(Props, Clone, PartialEq)]
pub struct ExportCardProps {
    pub chart: ExportChart,
}

#[component]
pub fn ExportCard(props: ExportCardProps) -> Element {
    let title = props.chart.title;
    let image_url = props.chart.image_url.clone();
    let download_url = props.chart.download_url().to_string();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 12px; background: #1e293b; border-radius: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; color: #f8fafc;",
                span { "{title}" }
                a {
                    href: "{download_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    style: "color: #fca311; font-size: 13px;",
                    "Download"
                }
            }
            img {
                src: "{image_url}",
                alt: "{title}",
                style: "width: 100%; border-radius: 8px;",
            }
        }
    }
}
