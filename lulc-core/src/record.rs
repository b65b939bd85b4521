use crate::category::Category;
use crate::field::CanonicalField;
use crate::raw::{RawRecord, RawValue};
use crate::year::Year;
use serde::{Deserialize, Serialize};

/// Site name used when a raw record has no usable name.
pub const UNKNOWN_SITE: &str = "Unknown Site";

/// Area (sq km) and share (%) of one category at one site in one vintage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMeasure {
    pub area: f64,
    pub percent: f64,
}

/// Canonical land-use record for one site in one vintage.
///
/// Built by the normalizer and never modified afterwards. Every category
/// has a measure and every number is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteYearRecord {
    site_name: String,
    year: Year,
    total_area_sq_km: f64,
    per_category: [CategoryMeasure; 7],
}

impl SiteYearRecord {
    pub(crate) fn new(
        site_name: String,
        year: Year,
        total_area_sq_km: f64,
        per_category: [CategoryMeasure; 7],
    ) -> Self {
        Self {
            site_name,
            year,
            total_area_sq_km,
            per_category,
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn total_area_sq_km(&self) -> f64 {
        self.total_area_sq_km
    }

    pub fn measure(&self, category: Category) -> CategoryMeasure {
        self.per_category[category.index()]
    }

    pub fn percent(&self, category: Category) -> f64 {
        self.measure(category).percent
    }

    pub fn area(&self, category: Category) -> f64 {
        self.measure(category).area
    }

    /// `(category, measure)` pairs in registry order.
    pub fn measures(&self) -> impl Iterator<Item = (Category, CategoryMeasure)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.measure(category)))
    }

    pub fn is_unknown_site(&self) -> bool {
        self.site_name == UNKNOWN_SITE
    }

    /// The raw record this canonical record corresponds to, under canonical keys.
    ///
    /// Normalizing the result for the same year reproduces `self` exactly.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(
            CanonicalField::SiteName.canonical_key(),
            RawValue::Text(self.site_name.clone()),
        );
        raw.insert(
            CanonicalField::TotalAreaSqKm.canonical_key(),
            self.total_area_sq_km,
        );
        for (category, measure) in self.measures() {
            raw.insert(CanonicalField::Area(category).canonical_key(), measure.area);
            raw.insert(CanonicalField::Percent(category).canonical_key(), measure.percent);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteYearRecord {
        let mut per_category = [CategoryMeasure::default(); 7];
        per_category[Category::Water.index()] = CategoryMeasure {
            area: 0.18,
            percent: 0.02,
        };
        per_category[Category::Rangeland.index()] = CategoryMeasure {
            area: 539.69,
            percent: 44.84,
        };
        SiteYearRecord::new("Abiyiadi TVET College".to_string(), Year::Y2020, 1203.5, per_category)
    }

    #[test]
    fn test_accessors() {
        let record = sample();
        assert_eq!(record.site_name(), "Abiyiadi TVET College");
        assert_eq!(record.year(), Year::Y2020);
        assert_eq!(record.percent(Category::Rangeland), 44.84);
        assert_eq!(record.area(Category::Water), 0.18);
        assert_eq!(record.percent(Category::Crops), 0.0);
        assert_eq!(record.measures().count(), 7);
        assert!(!record.is_unknown_site());
    }

    #[test]
    fn test_to_raw_uses_canonical_keys() {
        let raw = sample().to_raw();
        assert_eq!(raw.len(), 2 + 14);
        assert_eq!(raw.get("Total_Area_sq_km"), Some(&RawValue::Number(1203.5)));
        assert_eq!(raw.get("Rangeland_Percent"), Some(&RawValue::Number(44.84)));
        assert_eq!(
            raw.get("Site_Name"),
            Some(&RawValue::Text("Abiyiadi TVET College".to_string()))
        );
    }

    #[test]
    fn test_serializes_for_chart_bridge() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["site_name"], "Abiyiadi TVET College");
        assert_eq!(json["year"], 2020);
        assert_eq!(json["per_category"].as_array().unwrap().len(), 7);
    }
}
