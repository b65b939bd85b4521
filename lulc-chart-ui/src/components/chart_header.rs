//! Chart header with title and the years on display.

use dioxus::prelude::*;
use lulc_core::Year;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Survey years shown on the x axis
    #[props(default)]
    pub years: Vec<Year>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let years = props
        .years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !years.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Share of site area (%) for {years}"
                }
            }
        }
    }
}
