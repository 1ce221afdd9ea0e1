use super::StatChart;
use dioxus::prelude::*;
use gw_core::ChartPair;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPairViewProps {
    pub pair: ChartPair,
}

/// A primary chart and its compare-year counterpart side by side.
#[component]
pub fn ChartPairView(props: ChartPairViewProps) -> Element {
    let ChartPair { primary, compare } = props.pair;
    let columns = if compare.is_some() { "1fr 1fr" } else { "1fr" };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: {columns}; gap: 16px;",
            StatChart { view: primary }
            {compare.map(|view| rsx! { StatChart { view: view } })}
        }
    }
}
