//! Total-area timeline for the selected site.

use crate::state::AppState;
use dioxus::prelude::*;
use lulc_data::models::{TimelineEntry, Trend};
use lulc_utils::format;

#[component]
pub fn TimelineStrip() -> Element {
    let state = use_context::<AppState>();
    let years = state.settings.read().years.clone();
    let Some(site) = (state.selected_site)() else {
        return rsx! {};
    };

    let entries = state
        .dataset
        .read()
        .as_ref()
        .and_then(|dataset| dataset.timeline(&site, &years));

    let Some(entries) = entries else {
        return rsx! {
            p {
                style: "font-size: 12px; color: #888;",
                "Timeline unavailable: {site} is missing from at least one survey year."
            }
        };
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 12px 0;",
            for entry in entries {
                TimelineItem { entry }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TimelineItemProps {
    entry: TimelineEntry,
}

#[component]
fn TimelineItem(props: TimelineItemProps) -> Element {
    let entry = &props.entry;
    let color = match entry.trend {
        Trend::Positive => "#2e7d32",
        Trend::Negative => "#c62828",
        Trend::Flat => "#666",
    };
    let total = format::area_sq_km(entry.total_area_sq_km);

    rsx! {
        div {
            style: "flex: 1; padding: 8px; border: 1px solid #e0e0e0; border-radius: 6px; text-align: center;",
            div { style: "font-weight: bold;", "{entry.year}" }
            div { style: "font-size: 13px;", "{total}" }
            div { style: "font-size: 12px; color: {color};", "{entry.change_label}" }
        }
    }
}
