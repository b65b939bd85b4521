//! Query result model structs for land-use views.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use lulc_core::{Category, Year};
use serde::Serialize;

/// The category with the largest share among a candidate list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DominantCategory {
    pub category: Category,
    pub percent: f64,
}

/// Percentage shown on one category card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryPercent {
    pub category: Category,
    pub label: String,
    pub icon: String,
    pub percent: f64,
    pub selected: bool,
}

/// One bar series of the grouped bar chart: a category across years.
///
/// `values` has one entry per year in `years`, with `0` where data is missing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSeries {
    pub category: Category,
    pub label: String,
    pub color: String,
    pub years: Vec<Year>,
    pub values: Vec<f64>,
}

/// Direction of a timeline change.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Flat,
}

/// One step of the total-area timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineEntry {
    pub year: Year,
    pub total_area_sq_km: f64,
    /// Change against the previous entry in percent; `None` for the baseline.
    pub change_percent: Option<f64>,
    /// `"Baseline"` or a signed percentage such as `"+0.3%"`.
    pub change_label: String,
    pub trend: Trend,
}

/// Summary of a loaded dataset, shown before a site is selected.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetOverview {
    pub site_count: usize,
    pub years: Vec<Year>,
    pub categories: Vec<String>,
}
