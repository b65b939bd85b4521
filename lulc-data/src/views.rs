//! View models for the dashboard: category cards, chart series, timeline,
//! narrative and the welcome overview.
//!
//! These are thin compositions of [`queries`](crate::queries); they add
//! labels, colors and formatting but no new arithmetic.

use crate::models::{
    CategoryPercent, ChartSeries, DatasetOverview, DominantCategory, TimelineEntry, Trend,
};
use crate::settings::DashboardSettings;
use crate::Dataset;
use lulc_core::{Category, SelectedCategories, Year};
use lulc_utils::format;
use serde::Serialize;
use std::fmt;

/// Narrative summary of one site between the baseline and latest vintages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteNarrative {
    pub site_name: String,
    pub baseline_year: Year,
    pub latest_year: Year,
    pub total_area_latest: f64,
    /// `None` when the baseline total area is zero.
    pub area_change_percent: Option<f64>,
    pub dominant_baseline: Option<DominantCategory>,
    pub dominant_latest: Option<DominantCategory>,
    pub selected_coverage: f64,
}

impl SiteNarrative {
    /// Label/value pairs for the stats block.
    pub fn stats(&self) -> Vec<(String, String)> {
        vec![
            (
                format!("Total Area ({})", self.latest_year),
                format::area_sq_km(self.total_area_latest),
            ),
            (
                format!("Area Change ({}-{})", self.baseline_year, self.latest_year),
                self.area_change_percent
                    .map(format::percent)
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
            (
                format!("Dominant Use ({})", self.latest_year),
                dominant_label(self.dominant_latest),
            ),
            (
                "Selected Categories".to_string(),
                format::percent(self.selected_coverage),
            ),
        ]
    }

    /// The summary paragraph.
    pub fn summary(&self) -> String {
        let opening = format!(
            "Analysis of {} reveals significant land use transformations between {} and {}. \
             The site covers {} square kilometers",
            self.site_name,
            self.baseline_year,
            self.latest_year,
            format::fixed(self.total_area_latest, 1)
        );
        match self.area_change_percent {
            Some(change) => format!(
                "{}, showing a {} of {}% in total monitored area.",
                opening,
                if change >= 0.0 { "growth" } else { "reduction" },
                format::fixed(change.abs(), 1)
            ),
            None => format!(
                "{}; no area was recorded in {}, so the change in total monitored area is n/a.",
                opening, self.baseline_year
            ),
        }
    }

    /// Bullet points of the trend analysis.
    pub fn insights(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        lines.push(match self.dominant_baseline {
            Some(d) => format!(
                "{} was the primary land use in {} ({})",
                d.category.label(),
                self.baseline_year,
                format::percent(d.percent)
            ),
            None => format!("No primary land use recorded in {}", self.baseline_year),
        });
        lines.push(match self.dominant_latest {
            Some(d) => format!(
                "{} has emerged as dominant in {} ({})",
                d.category.label(),
                self.latest_year,
                format::percent(d.percent)
            ),
            None => format!("No dominant land use recorded in {}", self.latest_year),
        });
        if let Some(change) = self.area_change_percent {
            let (noun, adjective) = if change >= 0.0 {
                ("Expansion", "increased")
            } else {
                ("Contraction", "reduced")
            };
            lines.push(format!(
                "{} of monitored area suggests {} development activity",
                noun, adjective
            ));
        }
        lines.push(format!(
            "Selected categories represent {} of total land use in {}",
            format::percent(self.selected_coverage),
            self.latest_year
        ));
        lines
    }
}

fn dominant_label(dominant: Option<DominantCategory>) -> String {
    dominant
        .map(|d| d.category.label().to_string())
        .unwrap_or_else(|| "None".to_string())
}

impl fmt::Display for SiteNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        writeln!(f)?;
        for (label, value) in self.stats() {
            writeln!(f, "{}: {}", label, value)?;
        }
        writeln!(f)?;
        writeln!(f, "Trend Analysis")?;
        for line in self.insights() {
            writeln!(f, "- {}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for DatasetOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years: Vec<String> = self.years.iter().map(Year::to_string).collect();
        writeln!(
            f,
            "Welcome to the Land Use Variation Analyzer. Select a site to explore land use changes."
        )?;
        writeln!(
            f,
            "{} sites loaded for {}.",
            self.site_count,
            if years.is_empty() {
                "no years".to_string()
            } else {
                years.join(", ")
            }
        )?;
        write!(f, "Categories: {}", self.categories.join(", "))
    }
}

impl Dataset {
    /// One card per category in registry order, `None` when the record is absent.
    pub fn category_percentages(
        &self,
        site_name: &str,
        year: Year,
        selection: &SelectedCategories,
    ) -> Option<Vec<CategoryPercent>> {
        let record = self.get(site_name, year)?;
        Some(
            Category::registry()
                .iter()
                .map(|info| CategoryPercent {
                    category: info.category,
                    label: info.label.to_string(),
                    icon: info.icon.to_string(),
                    percent: record.percent(info.category),
                    selected: selection.is_selected(info.category),
                })
                .collect(),
        )
    }

    /// One series per selected category that clears `threshold` in some year.
    pub fn chart_series(
        &self,
        site_name: &str,
        years: &[Year],
        selection: &SelectedCategories,
        threshold: f64,
    ) -> Vec<ChartSeries> {
        self.non_zero_categories(site_name, years, selection, threshold)
            .into_iter()
            .map(|category| ChartSeries {
                category,
                label: category.label().to_string(),
                color: category.color().to_string(),
                years: years.to_vec(),
                values: self.time_series(site_name, category, years),
            })
            .collect()
    }

    /// Total area per year with the change against the previous year.
    ///
    /// `None` when the site lacks any requested year. A zero previous total
    /// gives a change of `0` rather than an undefined value.
    pub fn timeline(&self, site_name: &str, years: &[Year]) -> Option<Vec<TimelineEntry>> {
        let records = years
            .iter()
            .map(|year| self.get(site_name, *year))
            .collect::<Option<Vec<_>>>()?;

        let mut entries = Vec::with_capacity(records.len());
        let mut previous_total: Option<f64> = None;
        for record in records {
            let total = record.total_area_sq_km();
            let entry = match previous_total {
                None => TimelineEntry {
                    year: record.year(),
                    total_area_sq_km: total,
                    change_percent: None,
                    change_label: "Baseline".to_string(),
                    trend: Trend::Flat,
                },
                Some(prev) => {
                    let change = if prev != 0.0 {
                        (total - prev) / prev * 100.0
                    } else {
                        0.0
                    };
                    TimelineEntry {
                        year: record.year(),
                        total_area_sq_km: total,
                        change_percent: Some(change),
                        change_label: format::signed_percent(change),
                        trend: if change > 0.0 {
                            Trend::Positive
                        } else if change < 0.0 {
                            Trend::Negative
                        } else {
                            Trend::Flat
                        },
                    }
                }
            };
            previous_total = Some(total);
            entries.push(entry);
        }
        Some(entries)
    }

    /// Narrative for `site_name`; `None` unless both the baseline and latest records exist.
    pub fn narrative(
        &self,
        site_name: &str,
        settings: &DashboardSettings,
        selection: &SelectedCategories,
    ) -> Option<SiteNarrative> {
        let baseline = settings.baseline_year;
        let latest = settings.latest_year;
        let latest_record = self.get(site_name, latest)?;
        if !self.contains(site_name, baseline) {
            return None;
        }

        let area_change_percent = match self.area_change_percent(site_name, baseline, latest) {
            Ok(change) => Some(change),
            Err(e) => {
                log::debug!("narrative: {}", e);
                None
            }
        };

        Some(SiteNarrative {
            site_name: site_name.to_string(),
            baseline_year: baseline,
            latest_year: latest,
            total_area_latest: latest_record.total_area_sq_km(),
            area_change_percent,
            dominant_baseline: self.dominant_category(
                site_name,
                baseline,
                &settings.narrative_candidates,
            ),
            dominant_latest: self.dominant_category(site_name, latest, &settings.narrative_candidates),
            selected_coverage: self.selected_coverage(site_name, latest, selection),
        })
    }

    /// Welcome summary shown before any site is selected.
    pub fn overview(&self) -> DatasetOverview {
        DatasetOverview {
            site_count: self.all_site_names().len(),
            years: self.loaded_years(),
            categories: Category::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        }
    }
}
