//! In-memory dataset store and derived queries for land-use surveys.
//!
//! This crate holds normalized [`SiteYearRecord`]s per vintage and exposes
//! typed query methods for consumption by the CLI and the Dioxus/D3.js
//! dashboard.
//!
//! # Architecture
//!
//! - [`Dataset`]: per-year sequences of records, replaced wholesale on load
//! - [`queries`]: pure derivations (time series, deltas, dominant category, coverage)
//! - [`views`]: chart series, timeline, narrative and category cards built from queries
//! - [`settings`]: dashboard configuration (years, thresholds, narrative candidates)
//!
//! The store is single-threaded and owns no selection or "current site"
//! state; callers pass both explicitly into every query.
//!
//! # Usage
//!
//! ```rust
//! use lulc_core::raw::RawRecord;
//! use lulc_core::{Category, Year};
//! use lulc_data::Dataset;
//!
//! let mut dataset = Dataset::new();
//! let raws_2020 = RawRecord::parse_csv("Site_Name,BuiltArea_Percent\nA,20\n").unwrap();
//! let raws_2024 = RawRecord::parse_csv("Site_Name,BuiltArea_Percent\nA,35\n").unwrap();
//! dataset.load_raw(Year::Y2020, &raws_2020);
//! dataset.load_raw(Year::Y2024, &raws_2024);
//!
//! let delta = dataset.year_over_year_delta("A", Category::BuiltArea, Year::Y2020, Year::Y2024);
//! assert_eq!(delta, 15.0);
//! assert!(dataset.get("A", Year::Y2022).is_none());
//! ```

pub mod error;
pub mod models;
pub mod queries;
pub mod settings;
pub mod views;

pub use error::QueryError;
pub use settings::DashboardSettings;

use lulc_core::normalize::Normalizer;
use lulc_core::raw::RawRecord;
use lulc_core::{SiteYearRecord, Year, UNKNOWN_SITE};
use std::collections::{BTreeMap, BTreeSet};

/// Normalized records for every loaded vintage.
///
/// Within one vintage site names are unique: a later record with the same
/// name replaces the earlier one (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    years: BTreeMap<Year, Vec<SiteYearRecord>>,
}

impl Dataset {
    /// Create an empty dataset with no vintages loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything stored for `year` with `records`.
    ///
    /// No merge with earlier data for that year takes place. Returns the
    /// number of records kept after duplicate names are collapsed.
    pub fn load(&mut self, year: Year, records: Vec<SiteYearRecord>) -> usize {
        let mut kept: Vec<SiteYearRecord> = Vec::with_capacity(records.len());
        for record in records {
            match kept.iter_mut().find(|r| r.site_name() == record.site_name()) {
                Some(existing) => {
                    log::warn!(
                        "dataset: duplicate site {:?} in {}, keeping the later record",
                        record.site_name(),
                        year
                    );
                    *existing = record;
                }
                None => kept.push(record),
            }
        }
        let count = kept.len();
        self.years.insert(year, kept);
        log::info!("dataset: loaded {} sites for {}", count, year);
        count
    }

    /// Normalize `raws` with the standard alias table and load them for `year`.
    pub fn load_raw(&mut self, year: Year, raws: &[RawRecord]) -> usize {
        self.load_raw_with(&Normalizer::default(), year, raws)
    }

    /// Normalize `raws` with a specific normalizer and load them for `year`.
    pub fn load_raw_with(&mut self, normalizer: &Normalizer<'_>, year: Year, raws: &[RawRecord]) -> usize {
        let records = normalizer.normalize_batch(raws, year);
        self.load(year, records)
    }

    /// Exact, case-sensitive lookup of `site_name` within `year`.
    pub fn get(&self, site_name: &str, year: Year) -> Option<&SiteYearRecord> {
        self.years
            .get(&year)?
            .iter()
            .find(|r| r.site_name() == site_name)
    }

    pub fn contains(&self, site_name: &str, year: Year) -> bool {
        self.get(site_name, year).is_some()
    }

    pub fn is_loaded(&self, year: Year) -> bool {
        self.years.contains_key(&year)
    }

    /// Loaded vintages in chronological order.
    pub fn loaded_years(&self) -> Vec<Year> {
        self.years.keys().copied().collect()
    }

    /// Records for `year` in load order; empty when the year is not loaded.
    pub fn records(&self, year: Year) -> &[SiteYearRecord] {
        self.years.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every site name across every loaded year, excluding [`UNKNOWN_SITE`].
    pub fn all_site_names(&self) -> BTreeSet<String> {
        self.years
            .values()
            .flatten()
            .filter(|r| !r.is_unknown_site())
            .map(|r| r.site_name().to_string())
            .collect()
    }

    /// Site names in first-seen order (earliest vintage first, then load order).
    ///
    /// Used for selection lists, which keep the order of the source sheets.
    pub fn site_names_in_order(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in self.years.values().flatten() {
            if record.site_name() != UNKNOWN_SITE && !names.iter().any(|n| n == record.site_name()) {
                names.push(record.site_name().to_string());
            }
        }
        names
    }

    /// Years in `years` for which `site_name` has no record.
    pub fn missing_years(&self, site_name: &str, years: &[Year]) -> Vec<Year> {
        years
            .iter()
            .copied()
            .filter(|year| !self.contains(site_name, *year))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.years.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.years.clear();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{row, sample_dataset};
    use super::*;
    use lulc_core::Category;

    #[test]
    fn dataset_starts_empty() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert!(dataset.all_site_names().is_empty());
        assert!(dataset.get("A", Year::Y2020).is_none());
        assert!(dataset.records(Year::Y2024).is_empty());
    }

    #[test]
    fn load_replaces_year_wholesale() {
        let mut dataset = Dataset::new();
        dataset.load_raw(Year::Y2020, &[row("A", 1.0, &[]), row("B", 1.0, &[])]);
        dataset.load_raw(Year::Y2020, &[row("C", 1.0, &[])]);
        assert_eq!(dataset.records(Year::Y2020).len(), 1);
        assert!(dataset.get("A", Year::Y2020).is_none());
        assert!(dataset.get("C", Year::Y2020).is_some());
    }

    #[test]
    fn load_one_year_leaves_others_untouched() {
        let mut dataset = sample_dataset();
        dataset.load_raw(Year::Y2022, &[]);
        assert!(dataset.is_loaded(Year::Y2022));
        assert!(dataset.records(Year::Y2022).is_empty());
        assert_eq!(dataset.records(Year::Y2020).len(), 3);
    }

    #[test]
    fn duplicate_site_last_write_wins() {
        let mut dataset = Dataset::new();
        let kept = dataset.load_raw(
            Year::Y2020,
            &[
                row("A", 1.0, &[("Water_Percent", 1.0)]),
                row("B", 1.0, &[]),
                row("A", 1.0, &[("Water_Percent", 9.0)]),
            ],
        );
        assert_eq!(kept, 2);
        let a = dataset.get("A", Year::Y2020).unwrap();
        assert_eq!(a.percent(Category::Water), 9.0);
        assert_eq!(dataset.records(Year::Y2020)[0].site_name(), "A");
    }

    #[test]
    fn get_is_case_sensitive() {
        let dataset = sample_dataset();
        assert!(dataset.get("Adigrat University", Year::Y2020).is_some());
        assert!(dataset.get("adigrat university", Year::Y2020).is_none());
    }

    #[test]
    fn all_site_names_excludes_unknown_site() {
        let mut dataset = sample_dataset();
        dataset.load_raw(Year::Y2022, &[RawRecord::new(), row("Adigrat University", 1.0, &[])]);
        let names = dataset.all_site_names();
        assert_eq!(names.len(), 3);
        assert!(!names.contains(UNKNOWN_SITE));
        assert!(names.contains("Gap"));
    }

    #[test]
    fn site_present_in_one_year_only() {
        let mut dataset = Dataset::new();
        dataset.load_raw(Year::Y2024, &[row("Late", 1.0, &[])]);
        assert!(dataset.all_site_names().contains("Late"));
        assert!(dataset.get("Late", Year::Y2020).is_none());
        assert_eq!(
            dataset.missing_years("Late", &Year::ALL),
            vec![Year::Y2020, Year::Y2022]
        );
    }

    #[test]
    fn site_names_in_order_keeps_sheet_order() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.site_names_in_order(),
            vec!["Adigrat University", "Gap", "Flat"]
        );
    }

    #[test]
    fn loaded_years_are_chronological() {
        let mut dataset = Dataset::new();
        dataset.load_raw(Year::Y2024, &[]);
        dataset.load_raw(Year::Y2020, &[]);
        assert_eq!(dataset.loaded_years(), vec![Year::Y2020, Year::Y2024]);
        dataset.clear();
        assert!(dataset.loaded_years().is_empty());
    }
}
