//! Land Use Variation Analyzer
//!
//! Shows how land cover at each surveyed site changed across the 2020, 2022
//! and 2024 vintages: category toggle cards, a grouped D3.js bar chart, a
//! total-area timeline and a narrative summary.
//!
//! Data flow:
//! 1. `build.rs` copies the per-vintage fixtures into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: parse and normalize every vintage into a `Dataset`.
//! 4. On site or selection change: derive chart series and re-render via D3.js.

use anyhow::Context;
use dioxus::prelude::*;
use lulc_chart_ui::components::{
    CategoryCards, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, NarrativePanel,
    SiteSelector, TimelineStrip,
};
use lulc_chart_ui::js_bridge::{self, BarChartConfig};
use lulc_chart_ui::state::AppState;
use lulc_core::raw::RawRecord;
use lulc_core::Year;
use lulc_data::Dataset;

const LAND_USE_2020_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/land_use_2020.csv"));
const LAND_USE_2022_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/land_use_2022.csv"));
const LAND_USE_2024_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/land_use_2024.csv"));

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "land-use-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("land-use-root"))
        .launch(App);
}

/// Parse and normalize each vintage, returning the years that had no rows.
fn load_vintages(vintages: &[(Year, &str)]) -> anyhow::Result<(Dataset, Vec<Year>)> {
    let mut dataset = Dataset::new();
    let mut empty = Vec::new();
    for (year, csv) in vintages {
        let raws = RawRecord::parse_csv(csv)
            .with_context(|| format!("Failed to parse the {} survey", year))?;
        if dataset.load_raw(*year, &raws) == 0 {
            empty.push(*year);
        }
    }
    Ok((dataset, empty))
}

/// Parse and normalize the embedded vintages.
fn build_dataset() -> anyhow::Result<Dataset> {
    let (dataset, empty) = load_vintages(&[
        (Year::Y2020, LAND_USE_2020_CSV),
        (Year::Y2022, LAND_USE_2022_CSV),
        (Year::Y2024, LAND_USE_2024_CSV),
    ])?;
    for year in empty {
        log::warn!("[LULC] the {} survey has no rows", year);
    }
    Ok(dataset)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Build the dataset once on mount ───
    use_effect(move || {
        match build_dataset() {
            Ok(dataset) => state.install_dataset(dataset),
            Err(e) => {
                log::error!("[LULC] {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
                state.loading.set(false);
            }
        }
        js_bridge::init_charts();
    });

    // ─── Effect 2: Re-render the chart for the current site and selection ───
    use_effect(move || {
        let loading = (state.loading)();
        let site = (state.selected_site)();
        let selection = state.selection.read().clone();
        let settings = state.settings.read().clone();

        if loading {
            return;
        }
        let Some(site) = site else {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        };

        let series = match state.dataset.read().as_ref() {
            Some(dataset) => dataset.chart_series(
                &site,
                &settings.years,
                &selection,
                settings.non_zero_threshold,
            ),
            None => return,
        };

        js_bridge::render_bar_chart(CHART_CONTAINER_ID, &series, &BarChartConfig::for_site(&site));
    });

    let placeholder = if state.selected_site.read().is_none() {
        "Select a site to view its land use composition.".to_string()
    } else {
        String::new()
    };
    let years = state.settings.read().years.clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                h2 { style: "margin: 4px 0 8px 0;", "Land Use Variation Analyzer" }

                SiteSelector {}

                CategoryCards {}

                ChartHeader {
                    title: "Land Use Composition by Survey Year".to_string(),
                    years,
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    placeholder,
                }

                TimelineStrip {}

                NarrativePanel {}
            }
        }
    }
}
