//! Plain-text rendering of query results for the terminal.

use anyhow::Result;
use lulc_core::normalize::{FieldIssue, NormalizeReport};
use lulc_core::{SiteYearRecord, Year};
use lulc_data::models::TimelineEntry;
use lulc_utils::format;
use std::fmt::Write;

/// One record as a category table.
pub fn record_table(record: &SiteYearRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", record.site_name(), record.year());
    let _ = writeln!(out, "Total area: {}", format::area_sq_km(record.total_area_sq_km()));
    let _ = writeln!(out, "{:<18} {:>12} {:>9}", "Category", "Area (sq km)", "Share");
    for (category, measure) in record.measures() {
        let _ = writeln!(
            out,
            "{:<18} {:>12} {:>9}",
            category.label(),
            format::fixed(measure.area, 2),
            format::percent(measure.percent)
        );
    }
    out
}

pub fn timeline_table(entries: &[TimelineEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}  {:>14}  {}",
            entry.year,
            format::area_sq_km(entry.total_area_sq_km),
            entry.change_label
        );
    }
    out
}

fn issue_text(issue: &FieldIssue) -> String {
    match issue {
        FieldIssue::Missing(field) => format!("missing {}", field),
        FieldIssue::Unparseable { field, raw } => format!("unparseable {} ({:?})", field, raw),
    }
}

/// Normalization issues for one vintage, one line per degraded record.
pub fn validation_report(year: Year, results: &[(SiteYearRecord, NormalizeReport)]) -> String {
    let mut out = String::new();
    let degraded = results.iter().filter(|(_, r)| !r.is_clean()).count();
    let _ = writeln!(
        out,
        "{}: {} records, {} with defaulted fields",
        year,
        results.len(),
        degraded
    );
    for (index, (record, report)) in results.iter().enumerate() {
        if report.class_11_percent_applied || report.class_11_area_applied {
            let _ = writeln!(out, "  #{} {}: Rangeland taken from Class 11", index + 1, record.site_name());
        }
        if report.is_clean() {
            continue;
        }
        let issues: Vec<String> = report.issues.iter().map(issue_text).collect();
        let _ = writeln!(out, "  #{} {}: {}", index + 1, record.site_name(), issues.join(", "));
    }
    out
}

/// Canonical CSV of one vintage (the `to_raw` form of every record).
pub fn canonical_csv(records: &[SiteYearRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let header: Vec<&str> = lulc_core::field::CanonicalField::all()
        .into_iter()
        .map(|field| field.canonical_key())
        .collect();
    wtr.write_record(&header)?;
    for record in records {
        let raw = record.to_raw();
        let row: Vec<String> = header
            .iter()
            .map(|key| {
                raw.get(key)
                    .and_then(|value| value.as_text())
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lulc_core::normalize::Normalizer;
    use lulc_core::raw::RawRecord;

    fn normalized(csv: &str, year: Year) -> Vec<(SiteYearRecord, NormalizeReport)> {
        let raws = RawRecord::parse_csv(csv).unwrap();
        Normalizer::default().normalize_batch_with_reports(&raws, year)
    }

    #[test]
    fn test_record_table() {
        let results = normalized("Site_Name,Total_Area_sq_km,Crops_Percent\nA,12.34,40\n", Year::Y2020);
        let table = record_table(&results[0].0);
        assert!(table.starts_with("A (2020)\n"));
        assert!(table.contains("Total area: 12.3 sq km"));
        assert!(table.contains("40.0%"));
        assert_eq!(table.lines().count(), 3 + 7);
    }

    #[test]
    fn test_validation_report_lists_issues() {
        let results = normalized(
            "Site_Name,Total_Area_sq_km,Water_Percent\n,abc,1\n",
            Year::Y2022,
        );
        let report = validation_report(Year::Y2022, &results);
        assert!(report.starts_with("2022: 1 records, 1 with defaulted fields"));
        assert!(report.contains("Unknown Site: missing Site_Name"));
        assert!(report.contains("unparseable Total_Area_sq_km (\"abc\")"));
    }

    #[test]
    fn test_canonical_csv_renormalizes() {
        let results = normalized(
            "Site Name,Built Area %,Total Area\n\"Mekelle Industrial Park\",50.85,955.2\n",
            Year::Y2024,
        );
        let records: Vec<SiteYearRecord> = results.into_iter().map(|(r, _)| r).collect();
        let csv = canonical_csv(&records).unwrap();
        assert!(csv.starts_with("Site_Name,Total_Area_sq_km,Water_Area,Water_Percent"));

        let again = Normalizer::default().normalize_batch(&RawRecord::parse_csv(&csv).unwrap(), Year::Y2024);
        assert_eq!(again, records);
    }
}
