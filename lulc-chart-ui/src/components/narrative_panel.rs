//! Narrative panel: site summary, or the dataset overview when no site is picked.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn NarrativePanel() -> Element {
    let state = use_context::<AppState>();
    let settings = state.settings.read().clone();
    let selection = state.selection.read().clone();
    let site = (state.selected_site)();
    let dataset = state.dataset.read();
    let Some(dataset) = dataset.as_ref() else {
        return rsx! {};
    };

    let Some(site) = site else {
        let overview = dataset.overview();
        let years = overview
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let categories = overview.categories.join(", ");
        return rsx! {
            div {
                style: "margin-top: 16px;",
                p {
                    "Welcome to the Land Use Variation Analyzer. Select a site from the dropdown menu to begin exploring land use changes."
                }
                p {
                    style: "font-size: 13px; color: #555;",
                    "{overview.site_count} sites surveyed in {years}, covering {categories}."
                }
            }
        };
    };

    let Some(narrative) = dataset.narrative(&site, &settings, &selection) else {
        return rsx! {
            p {
                style: "font-size: 12px; color: #888;",
                "No narrative: {site} needs records for {settings.baseline_year} and {settings.latest_year}."
            }
        };
    };

    let summary = narrative.summary();
    let stats = narrative.stats();
    let insights = narrative.insights();

    rsx! {
        div {
            style: "margin-top: 16px;",
            p { "{summary}" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 6px; font-size: 13px;",
                for (label, value) in stats {
                    div {
                        key: "{label}",
                        span { style: "color: #666;", "{label}: " }
                        strong { "{value}" }
                    }
                }
            }
            h4 { style: "margin: 12px 0 4px 0;", "Trend Analysis" }
            ul {
                style: "font-size: 13px;",
                for line in insights {
                    li { "{line}" }
                }
            }
        }
    }
}
