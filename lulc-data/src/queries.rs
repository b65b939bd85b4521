//! Derived queries over a [`Dataset`].
//!
//! Every method here is a pure read. Absent data (site missing from a
//! vintage, vintage never loaded) reads as `0` so that chart series always
//! have one value per requested year; the only exception is the area-change
//! ratio, which reports an undefined baseline instead of inventing a number.

use crate::error::QueryError;
use crate::models::DominantCategory;
use crate::Dataset;
use lulc_core::{Category, SelectedCategories, Year};

/// Default minimum share (%) for a category to count as present in a chart.
pub const NON_ZERO_THRESHOLD: f64 = 0.01;

impl Dataset {
    /// Share of `category` at `site_name` in `year`, `0` when absent.
    pub fn percent(&self, site_name: &str, year: Year, category: Category) -> f64 {
        self.get(site_name, year)
            .map(|r| r.percent(category))
            .unwrap_or(0.0)
    }

    /// Total surveyed area at `site_name` in `year`, `0` when absent.
    pub fn total_area(&self, site_name: &str, year: Year) -> f64 {
        self.get(site_name, year)
            .map(|r| r.total_area_sq_km())
            .unwrap_or(0.0)
    }

    /// Share of `category` for each of `years`, in order; missing years read `0`.
    pub fn time_series(&self, site_name: &str, category: Category, years: &[Year]) -> Vec<f64> {
        years
            .iter()
            .map(|year| self.percent(site_name, *year, category))
            .collect()
    }

    /// Selected categories with a share above `threshold` in at least one of `years`.
    ///
    /// Returned in registry order.
    pub fn non_zero_categories(
        &self,
        site_name: &str,
        years: &[Year],
        selection: &SelectedCategories,
        threshold: f64,
    ) -> Vec<Category> {
        selection
            .iter()
            .filter(|category| {
                years
                    .iter()
                    .any(|year| self.percent(site_name, *year, *category) > threshold)
            })
            .collect()
    }

    /// `percent(year_b) - percent(year_a)`; positive means growth.
    pub fn year_over_year_delta(
        &self,
        site_name: &str,
        category: Category,
        year_a: Year,
        year_b: Year,
    ) -> f64 {
        self.percent(site_name, year_b, category) - self.percent(site_name, year_a, category)
    }

    /// The candidate with the strictly largest positive share.
    ///
    /// Ties go to the candidate that comes first in `candidates`. Returns
    /// `None` when the record is absent or no candidate has a positive share.
    pub fn dominant_category(
        &self,
        site_name: &str,
        year: Year,
        candidates: &[Category],
    ) -> Option<DominantCategory> {
        let record = self.get(site_name, year)?;
        let mut best: Option<DominantCategory> = None;
        for category in candidates {
            let percent = record.percent(*category);
            let current_max = best.map(|b| b.percent).unwrap_or(0.0);
            if percent > current_max {
                best = Some(DominantCategory {
                    category: *category,
                    percent,
                });
            }
        }
        best
    }

    /// Relative change of total area from `year_a` to `year_b`, in percent.
    ///
    /// Fails with [`QueryError::UnknownSite`] when either record is absent and
    /// with [`QueryError::DivisionUndefined`] when the `year_a` total is zero.
    pub fn area_change_percent(
        &self,
        site_name: &str,
        year_a: Year,
        year_b: Year,
    ) -> Result<f64, QueryError> {
        let before = self.get(site_name, year_a).ok_or_else(|| QueryError::UnknownSite {
            site: site_name.to_string(),
            year: year_a,
        })?;
        let after = self.get(site_name, year_b).ok_or_else(|| QueryError::UnknownSite {
            site: site_name.to_string(),
            year: year_b,
        })?;
        let base = before.total_area_sq_km();
        if base == 0.0 {
            return Err(QueryError::DivisionUndefined {
                site: site_name.to_string(),
                year: year_a,
            });
        }
        Ok((after.total_area_sq_km() - base) / base * 100.0)
    }

    /// Relative change of total area without any guard.
    ///
    /// A zero baseline yields an infinite (or NaN, when both totals are zero)
    /// result; absent records read as zero. Prefer
    /// [`area_change_percent`](Self::area_change_percent).
    pub fn area_change_percent_unguarded(&self, site_name: &str, year_a: Year, year_b: Year) -> f64 {
        let base = self.total_area(site_name, year_a);
        (self.total_area(site_name, year_b) - base) / base * 100.0
    }

    /// Sum of the selected categories' shares; not clamped to 100.
    pub fn selected_coverage(&self, site_name: &str, year: Year, selection: &SelectedCategories) -> f64 {
        selection
            .iter()
            .map(|category| self.percent(site_name, year, category))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{row, sample_dataset};

    const YEARS: [Year; 3] = Year::ALL;
    const ADIGRAT: &str = "Adigrat University";

    #[test]
    fn time_series_full() {
        let dataset = sample_dataset();
        let series = dataset.time_series(ADIGRAT, Category::BuiltArea, &YEARS);
        assert_eq!(series, vec![15.16, 16.74, 18.62]);
    }

    #[test]
    fn time_series_missing_year_reads_zero() {
        let dataset = sample_dataset();
        let series = dataset.time_series("Gap", Category::Water, &YEARS);
        assert_eq!(series, vec![10.0, 0.0, 12.0]);
    }

    #[test]
    fn time_series_unknown_site_is_all_zero() {
        let dataset = sample_dataset();
        assert_eq!(dataset.time_series("Nowhere", Category::Water, &YEARS), vec![0.0; 3]);
        assert!(dataset.time_series(ADIGRAT, Category::Water, &[]).is_empty());
    }

    #[test]
    fn non_zero_categories_filters_negligible() {
        let dataset = sample_dataset();
        let selection = SelectedCategories::default();
        let kept = dataset.non_zero_categories(ADIGRAT, &YEARS, &selection, NON_ZERO_THRESHOLD);
        // Flood vegetation never exceeds 0.01 (max 0.006).
        assert!(!kept.contains(&Category::FloodVegetation));
        assert_eq!(kept.len(), 6);
        assert_eq!(kept[0], Category::Water);
    }

    #[test]
    fn non_zero_categories_respects_selection() {
        let dataset = sample_dataset();
        let mut selection = SelectedCategories::default();
        selection.toggle(Category::Rangeland);
        let kept = dataset.non_zero_categories(ADIGRAT, &YEARS, &selection, NON_ZERO_THRESHOLD);
        assert!(!kept.contains(&Category::Rangeland));
        assert!(dataset
            .non_zero_categories(ADIGRAT, &YEARS, &SelectedCategories::none(), NON_ZERO_THRESHOLD)
            .is_empty());
    }

    #[test]
    fn year_over_year_delta_sign() {
        let dataset = sample_dataset();
        let growth = dataset.year_over_year_delta(ADIGRAT, Category::BuiltArea, Year::Y2020, Year::Y2024);
        assert!((growth - 3.46).abs() < 1e-9);
        let loss = dataset.year_over_year_delta(ADIGRAT, Category::Rangeland, Year::Y2020, Year::Y2024);
        assert!(loss < 0.0);
    }

    #[test]
    fn year_over_year_delta_missing_reads_zero() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.year_over_year_delta("Gap", Category::Water, Year::Y2020, Year::Y2022),
            -10.0
        );
    }

    #[test]
    fn dominant_category_picks_largest() {
        let dataset = sample_dataset();
        let dominant = dataset
            .dominant_category(ADIGRAT, Year::Y2024, &Category::ALL)
            .unwrap();
        assert_eq!(dominant.category, Category::Rangeland);
        assert_eq!(dominant.percent, 55.23);
    }

    #[test]
    fn dominant_category_tie_goes_to_first_candidate() {
        let dataset = sample_dataset();
        // Gap 2020: Crops 30, BuiltArea 30.
        for _ in 0..3 {
            let first = dataset
                .dominant_category("Gap", Year::Y2020, &[Category::Crops, Category::BuiltArea])
                .unwrap();
            assert_eq!(first.category, Category::Crops);
        }
        let reversed = dataset
            .dominant_category("Gap", Year::Y2020, &[Category::BuiltArea, Category::Crops])
            .unwrap();
        assert_eq!(reversed.category, Category::BuiltArea);
    }

    #[test]
    fn dominant_category_absent_or_all_zero() {
        let dataset = sample_dataset();
        assert!(dataset.dominant_category("Gap", Year::Y2022, &Category::ALL).is_none());
        assert!(dataset
            .dominant_category("Flat", Year::Y2020, &[Category::Trees, Category::Crops])
            .is_none());
        assert!(dataset.dominant_category(ADIGRAT, Year::Y2020, &[]).is_none());
    }

    #[test]
    fn area_change_percent_regular() {
        let dataset = sample_dataset();
        let change = dataset.area_change_percent("Gap", Year::Y2020, Year::Y2024).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn area_change_percent_zero_baseline() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.area_change_percent("Flat", Year::Y2020, Year::Y2024),
            Err(QueryError::DivisionUndefined {
                site: "Flat".to_string(),
                year: Year::Y2020
            })
        );
        let raw = dataset.area_change_percent_unguarded("Flat", Year::Y2020, Year::Y2024);
        assert!(!raw.is_finite());
    }

    #[test]
    fn area_change_percent_missing_record() {
        let dataset = sample_dataset();
        assert!(matches!(
            dataset.area_change_percent("Gap", Year::Y2022, Year::Y2024),
            Err(QueryError::UnknownSite { year: Year::Y2022, .. })
        ));
        assert!(dataset
            .area_change_percent_unguarded("Nowhere", Year::Y2020, Year::Y2024)
            .is_nan());
    }

    #[test]
    fn selected_coverage_sums_selection() {
        let dataset = sample_dataset();
        let all = dataset.selected_coverage("Gap", Year::Y2024, &SelectedCategories::default());
        assert!((all - 72.0).abs() < 1e-9);
        let only_water: SelectedCategories = [Category::Water].into_iter().collect();
        assert_eq!(dataset.selected_coverage("Gap", Year::Y2024, &only_water), 12.0);
        assert_eq!(
            dataset.selected_coverage("Gap", Year::Y2022, &SelectedCategories::default()),
            0.0
        );
    }

    #[test]
    fn selected_coverage_is_not_clamped() {
        let mut dataset = Dataset::new();
        dataset.load_raw(
            Year::Y2020,
            &[row("Over", 1.0, &[("Water_Percent", 70.0), ("Trees_Percent", 45.0)])],
        );
        let coverage = dataset.selected_coverage("Over", Year::Y2020, &SelectedCategories::default());
        assert_eq!(coverage, 115.0);
    }
}
