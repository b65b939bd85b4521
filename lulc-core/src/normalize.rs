//! Raw survey rows to canonical [`SiteYearRecord`]s.
//!
//! Normalization is best-effort: a field that cannot be found or parsed
//! becomes `0` (or [`UNKNOWN_SITE`] for the name) and is noted in the
//! [`NormalizeReport`]; it never fails the record or the batch.
//!
//! For the 2024 vintage a strictly positive `Class 11` percent replaces the
//! Rangeland percent, and a strictly positive `Class 11` area replaces the
//! Rangeland area.

use crate::category::Category;
use crate::field::{CanonicalField, FieldAliasTable, CLASS_11_AREA_ALIASES, CLASS_11_PERCENT_ALIASES};
use crate::raw::{RawRecord, RawValue};
use crate::record::{CategoryMeasure, SiteYearRecord, UNKNOWN_SITE};
use crate::resolver::resolve;
use crate::year::Year;

/// Why a canonical field fell back to its default.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    /// No alias present, or the cell was empty.
    Missing(CanonicalField),
    /// A value was present but is not a finite number.
    Unparseable { field: CanonicalField, raw: String },
}

/// Per-record account of the defaults applied during normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub issues: Vec<FieldIssue>,
    /// Set when the 2024 Class 11 percent replaced the Rangeland percent.
    pub class_11_percent_applied: bool,
    /// Set when the 2024 Class 11 area replaced the Rangeland area.
    pub class_11_area_applied: bool,
}

impl NormalizeReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn missing(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        self.issues.iter().filter_map(|issue| match issue {
            FieldIssue::Missing(field) => Some(*field),
            FieldIssue::Unparseable { .. } => None,
        })
    }

    pub fn unparseable(&self) -> impl Iterator<Item = (CanonicalField, &str)> + '_ {
        self.issues.iter().filter_map(|issue| match issue {
            FieldIssue::Unparseable { field, raw } => Some((*field, raw.as_str())),
            FieldIssue::Missing(_) => None,
        })
    }
}

/// Applies a [`FieldAliasTable`] to raw records.
#[derive(Debug, Clone)]
pub struct Normalizer<'t> {
    aliases: &'t FieldAliasTable,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(FieldAliasTable::standard())
    }
}

impl<'t> Normalizer<'t> {
    pub fn new(aliases: &'t FieldAliasTable) -> Self {
        Self { aliases }
    }

    /// Normalize one raw record for `year`.
    pub fn normalize(&self, raw: &RawRecord, year: Year) -> SiteYearRecord {
        self.normalize_with_report(raw, year).0
    }

    /// Normalize one raw record and report every default that was applied.
    pub fn normalize_with_report(&self, raw: &RawRecord, year: Year) -> (SiteYearRecord, NormalizeReport) {
        let mut report = NormalizeReport::default();

        let site_name = self.site_name(raw, &mut report);
        let total_area_sq_km = self.number(raw, CanonicalField::TotalAreaSqKm, &mut report);

        let mut per_category = [CategoryMeasure::default(); 7];
        for category in Category::ALL {
            per_category[category.index()] = CategoryMeasure {
                area: self.number(raw, CanonicalField::Area(category), &mut report),
                percent: self.number(raw, CanonicalField::Percent(category), &mut report),
            };
        }

        if year.has_class_11_override() {
            let rangeland = &mut per_category[Category::Rangeland.index()];
            let class_11_percent = class_11_value(raw, &CLASS_11_PERCENT_ALIASES);
            if class_11_percent > 0.0 {
                log::debug!(
                    "normalize: {} {}: Class 11 percent {} replaces Rangeland {}",
                    site_name,
                    year,
                    class_11_percent,
                    rangeland.percent
                );
                rangeland.percent = class_11_percent;
                report.class_11_percent_applied = true;
            }
            let class_11_area = class_11_value(raw, &CLASS_11_AREA_ALIASES);
            if class_11_area > 0.0 {
                rangeland.area = class_11_area;
                report.class_11_area_applied = true;
            }
        }

        let record = SiteYearRecord::new(site_name, year, total_area_sq_km, per_category);
        (record, report)
    }

    /// Normalize a whole payload; malformed rows degrade, they are never dropped.
    pub fn normalize_batch(&self, raws: &[RawRecord], year: Year) -> Vec<SiteYearRecord> {
        self.normalize_batch_with_reports(raws, year)
            .into_iter()
            .map(|(record, _)| record)
            .collect()
    }

    pub fn normalize_batch_with_reports(
        &self,
        raws: &[RawRecord],
        year: Year,
    ) -> Vec<(SiteYearRecord, NormalizeReport)> {
        let results: Vec<(SiteYearRecord, NormalizeReport)> = raws
            .iter()
            .map(|raw| self.normalize_with_report(raw, year))
            .collect();
        let degraded = results.iter().filter(|(_, report)| !report.is_clean()).count();
        log::info!(
            "normalize: {} records for {}, {} with defaulted fields",
            results.len(),
            year,
            degraded
        );
        results
    }

    fn site_name(&self, raw: &RawRecord, report: &mut NormalizeReport) -> String {
        let field = CanonicalField::SiteName;
        match resolve(raw, self.aliases.aliases(field)).and_then(RawValue::as_text) {
            Some(name) => name,
            None => {
                log::warn!("normalize: record without a site name, using \"{}\"", UNKNOWN_SITE);
                report.issues.push(FieldIssue::Missing(field));
                UNKNOWN_SITE.to_string()
            }
        }
    }

    fn number(&self, raw: &RawRecord, field: CanonicalField, report: &mut NormalizeReport) -> f64 {
        let resolved = resolve(raw, self.aliases.aliases(field))
            .filter(|value| !matches!(value, RawValue::Text(s) if s.trim().is_empty()));
        match resolved {
            None | Some(RawValue::Null) => {
                log::debug!("normalize: {} missing, defaulting to 0", field);
                report.issues.push(FieldIssue::Missing(field));
                0.0
            }
            Some(value) => match value.as_number() {
                Some(n) => n,
                None => {
                    let raw_text = match value {
                        RawValue::Number(n) => n.to_string(),
                        RawValue::Text(s) => s.clone(),
                        RawValue::Null => String::new(),
                    };
                    log::debug!("normalize: {} unparseable ({:?}), defaulting to 0", field, raw_text);
                    report.issues.push(FieldIssue::Unparseable { field, raw: raw_text });
                    0.0
                }
            },
        }
    }
}

fn class_11_value(raw: &RawRecord, aliases: &[&str]) -> f64 {
    resolve(raw, aliases)
        .and_then(RawValue::as_number)
        .unwrap_or_default()
}

/// Normalize one raw record with the standard alias table.
pub fn normalize(raw: &RawRecord, year: Year) -> SiteYearRecord {
    Normalizer::default().normalize(raw, year)
}

/// Normalize a payload with the standard alias table.
pub fn normalize_batch(raws: &[RawRecord], year: Year) -> Vec<SiteYearRecord> {
    Normalizer::default().normalize_batch(raws, year)
}
