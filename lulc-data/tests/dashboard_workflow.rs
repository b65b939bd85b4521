use lulc_core::normalize::Normalizer;
use lulc_core::raw::{RawRecord, RawValue};
use lulc_core::{Category, SelectedCategories, Year};
use lulc_data::{Dataset, DashboardSettings, QueryError};
use std::collections::BTreeSet;

const FIXTURE_2020: &str = include_str!("../../fixtures/land_use_2020.csv");
const FIXTURE_2022: &str = include_str!("../../fixtures/land_use_2022.csv");
const FIXTURE_2024: &str = include_str!("../../fixtures/land_use_2024.csv");

fn fixture_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    for (year, csv) in [
        (Year::Y2020, FIXTURE_2020),
        (Year::Y2022, FIXTURE_2022),
        (Year::Y2024, FIXTURE_2024),
    ] {
        let raws = RawRecord::parse_csv(csv).unwrap();
        assert_eq!(dataset.load_raw(year, &raws), 4);
    }
    dataset
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn end_to_end_delta_with_a_missing_vintage() {
    let mut dataset = Dataset::new();
    let raws_2020 =
        RawRecord::parse_csv("Site_Name,BuiltArea_Percent,Water_Percent\nA,20,10\n").unwrap();
    let raws_2024 =
        RawRecord::parse_csv("Site_Name,BuiltArea_Percent,Water_Percent\nA,35,12\n").unwrap();
    dataset.load_raw(Year::Y2020, &raws_2020);
    dataset.load_raw(Year::Y2024, &raws_2024);

    assert_eq!(dataset.all_site_names(), BTreeSet::from(["A".to_string()]));

    assert_eq!(
        dataset.year_over_year_delta("A", Category::BuiltArea, Year::Y2020, Year::Y2024),
        15.0
    );
    assert!(dataset.get("A", Year::Y2022).is_none());
    assert_eq!(
        dataset.time_series("A", Category::BuiltArea, &Year::ALL),
        vec![20.0, 0.0, 35.0]
    );
    assert_eq!(
        dataset.time_series("A", Category::Water, &Year::ALL),
        vec![10.0, 0.0, 12.0]
    );
}

#[test]
fn fixtures_load_with_alternate_2024_headers() {
    let dataset = fixture_dataset();
    assert_eq!(
        dataset.site_names_in_order(),
        vec![
            "Abiyiadi TVET College",
            "Abreha We'atsbha Elementary School",
            "Adigrat University",
            "Mekelle Industrial Park",
        ]
    );

    let record = dataset.get("Abiyiadi TVET College", Year::Y2024).unwrap();
    assert!(approx(record.total_area_sq_km(), 1208.75));
    assert!(approx(record.percent(Category::BuiltArea), 45.52));
    assert!(approx(record.percent(Category::BareGround), 0.26));
    assert!(approx(record.area(Category::Crops), 172.30));
    // Rangeland comes from the Class 11 columns in 2024.
    assert!(approx(record.percent(Category::Rangeland), 39.89));
    assert!(approx(record.area(Category::Rangeland), 482.89));
}

#[test]
fn fixture_2024_reports_class_11_override() {
    let raws = RawRecord::parse_csv(FIXTURE_2024).unwrap();
    let results = Normalizer::default().normalize_batch_with_reports(&raws, Year::Y2024);
    assert_eq!(results.len(), 4);
    for (_, report) in &results {
        assert!(report.class_11_percent_applied);
        assert!(report.class_11_area_applied);
        assert!(report.unparseable().next().is_none());
    }
}

#[test]
fn fixture_dashboard_views() {
    let dataset = fixture_dataset();
    let settings = DashboardSettings::default();
    let selection = settings.selection();
    let site = "Mekelle Industrial Park";

    let series = dataset.chart_series(site, &settings.years, &selection, settings.non_zero_threshold);
    assert_eq!(series.len(), 7);
    let built = series
        .iter()
        .find(|s| s.category == Category::BuiltArea)
        .unwrap();
    assert_eq!(built.values, vec![44.26, 47.32, 50.85]);

    let timeline = dataset.timeline(site, &settings.years).unwrap();
    assert_eq!(timeline[0].change_label, "Baseline");
    assert_eq!(timeline[1].change_label, "+0.2%");

    let narrative = dataset.narrative(site, &settings, &selection).unwrap();
    assert_eq!(narrative.dominant_baseline.unwrap().category, Category::BuiltArea);
    assert_eq!(narrative.dominant_latest.unwrap().category, Category::BuiltArea);
    assert!(narrative.to_string().contains("Total Area (2024): 955.2 sq km"));
}

#[test]
fn dominant_tie_is_stable() {
    let mut dataset = Dataset::new();
    let raws = RawRecord::parse_csv("Site_Name,Crops_Percent,BuiltArea_Percent\nTie,30,30\n").unwrap();
    dataset.load_raw(Year::Y2020, &raws);
    let candidates = [Category::Crops, Category::BuiltArea];
    let first = dataset.dominant_category("Tie", Year::Y2020, &candidates).unwrap();
    for _ in 0..5 {
        assert_eq!(
            dataset.dominant_category("Tie", Year::Y2020, &candidates),
            Some(first)
        );
    }
    assert_eq!(first.category, Category::Crops);
}

#[test]
fn zero_baseline_area_change() {
    let mut dataset = Dataset::new();
    dataset.load_raw(
        Year::Y2020,
        &RawRecord::parse_csv("Site_Name,Total_Area_sq_km\nZ,0\n").unwrap(),
    );
    dataset.load_raw(
        Year::Y2024,
        &RawRecord::parse_csv("Site_Name,Total_Area_sq_km\nZ,12.5\n").unwrap(),
    );
    assert!(!dataset
        .area_change_percent_unguarded("Z", Year::Y2020, Year::Y2024)
        .is_finite());
    assert!(matches!(
        dataset.area_change_percent("Z", Year::Y2020, Year::Y2024),
        Err(QueryError::DivisionUndefined { .. })
    ));
}

#[test]
fn renormalizing_canonical_export_is_identity() {
    let dataset = fixture_dataset();
    let normalizer = Normalizer::default();
    for year in Year::ALL {
        for record in dataset.records(year) {
            let again = normalizer.normalize(&record.to_raw(), year);
            assert_eq!(&again, record);
        }
    }
}

#[test]
fn json_payload_with_nulls_and_text_numbers() {
    let json = r#"[
        {"Site Name": "J", "Total Area": "1,000.5", "Water %": null, "Trees_Percent": "12.5%"},
        {"Total_Area_sq_km": 3}
    ]"#;
    let raws = RawRecord::parse_json(json).unwrap();
    assert_eq!(raws[0].get("Water %"), Some(&RawValue::Null));

    let mut dataset = Dataset::new();
    assert_eq!(dataset.load_raw(Year::Y2022, &raws), 2);
    let record = dataset.get("J", Year::Y2022).unwrap();
    assert!(approx(record.total_area_sq_km(), 1000.5));
    assert_eq!(record.percent(Category::Water), 0.0);
    assert_eq!(record.percent(Category::Trees), 12.5);
    assert!(dataset.get("Unknown Site", Year::Y2022).is_some());
    assert_eq!(dataset.all_site_names().len(), 1);
}

#[test]
fn selection_toggle_drives_coverage() {
    let dataset = fixture_dataset();
    let mut selection = SelectedCategories::default();
    let site = "Adigrat University";
    let all = dataset.selected_coverage(site, Year::Y2024, &selection);
    assert!(!selection.toggle(Category::Rangeland));
    let without = dataset.selected_coverage(site, Year::Y2024, &selection);
    assert!(approx(all - without, 55.23));
}
