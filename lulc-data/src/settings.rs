//! Dashboard configuration.
//!
//! Settings are plain JSON; every key is optional and falls back to the
//! stock dashboard values.

use crate::queries::NON_ZERO_THRESHOLD;
use anyhow::{bail, Context, Result};
use lulc_core::{Category, SelectedCategories, Year};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Vintages shown on the chart and timeline, in display order.
    pub years: Vec<Year>,
    /// A category is charted only if some year exceeds this share.
    pub non_zero_threshold: f64,
    /// Categories considered when naming the dominant land use.
    pub narrative_candidates: Vec<Category>,
    pub baseline_year: Year,
    pub latest_year: Year,
    /// Categories selected when the dashboard opens.
    pub default_selection: Vec<Category>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            years: Year::ALL.to_vec(),
            non_zero_threshold: NON_ZERO_THRESHOLD,
            narrative_candidates: vec![
                Category::Water,
                Category::Trees,
                Category::Crops,
                Category::BuiltArea,
                Category::Rangeland,
            ],
            baseline_year: Year::Y2020,
            latest_year: Year::Y2024,
            default_selection: Category::ALL.to_vec(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON, filling absent keys with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: DashboardSettings =
            serde_json::from_str(json).context("Failed to parse dashboard settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        log::info!("settings: loading {}", path.display());
        Self::from_json_str(&json)
    }

    /// The initial selection set.
    pub fn selection(&self) -> SelectedCategories {
        self.default_selection.iter().copied().collect()
    }

    fn validate(&self) -> Result<()> {
        if self.years.is_empty() {
            bail!("Dashboard settings must list at least one year");
        }
        if !self.non_zero_threshold.is_finite() || self.non_zero_threshold < 0.0 {
            bail!(
                "non_zero_threshold must be a finite, non-negative number, got {}",
                self.non_zero_threshold
            );
        }
        if self.baseline_year >= self.latest_year {
            bail!(
                "baseline_year ({}) must precede latest_year ({})",
                self.baseline_year,
                self.latest_year
            );
        }
        Ok(())
    }
}
