//! Payload loading for the CLI.
//!
//! Each vintage comes from its own file (`--year-2020` etc.), from a single
//! JSON bundle keyed by year, or from the fixtures compiled into the binary.
//! Files may be CSV or JSON, optionally gzip-compressed (`.csv.gz`, `.json.gz`).

use anyhow::{Context, Result};
use clap::Args;
use flate2::read::GzDecoder;
use log::info;
use lulc_core::raw::RawRecord;
use lulc_core::Year;
use lulc_data::{Dataset, DashboardSettings};
use std::io::Read;
use std::path::{Path, PathBuf};

const FIXTURE_2020: &str = include_str!("../../fixtures/land_use_2020.csv");
const FIXTURE_2022: &str = include_str!("../../fixtures/land_use_2022.csv");
const FIXTURE_2024: &str = include_str!("../../fixtures/land_use_2024.csv");

/// Where survey payloads and settings come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// 2020 payload (CSV or JSON, optionally .gz)
    #[arg(long = "year-2020", global = true)]
    pub year_2020: Option<PathBuf>,

    /// 2022 payload (CSV or JSON, optionally .gz)
    #[arg(long = "year-2022", global = true)]
    pub year_2022: Option<PathBuf>,

    /// 2024 payload (CSV or JSON, optionally .gz)
    #[arg(long = "year-2024", global = true)]
    pub year_2024: Option<PathBuf>,

    /// JSON object keyed by year, e.g. {"2020": [...], "2024": [...]}
    #[arg(long, global = true)]
    pub bundle: Option<PathBuf>,

    /// Dashboard settings JSON
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    fn path_for(&self, year: Year) -> Option<&Path> {
        match year {
            Year::Y2020 => self.year_2020.as_deref(),
            Year::Y2022 => self.year_2022.as_deref(),
            Year::Y2024 => self.year_2024.as_deref(),
        }
    }

    fn has_payloads(&self) -> bool {
        self.bundle.is_some() || Year::ALL.iter().any(|y| self.path_for(*y).is_some())
    }
}

/// Payload format, decided by file extension after stripping `.gz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Csv,
    Json,
}

impl PayloadFormat {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".json") {
            PayloadFormat::Json
        } else {
            PayloadFormat::Csv
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Read a file to a string, decompressing it when the name ends in `.gz`.
pub fn read_payload(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if is_gzip(path) {
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to decompress {}", path.display()))?;
        Ok(text)
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
    }
}

pub fn parse_payload(text: &str, format: PayloadFormat) -> Result<Vec<RawRecord>> {
    let records = match format {
        PayloadFormat::Csv => RawRecord::parse_csv(text)?,
        PayloadFormat::Json => RawRecord::parse_json(text)?,
    };
    Ok(records)
}

pub fn load_payload(path: &Path) -> Result<Vec<RawRecord>> {
    let text = read_payload(path)?;
    parse_payload(&text, PayloadFormat::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// The compiled-in sample payloads, one per vintage.
pub fn fixture_payloads() -> Result<Vec<(Year, Vec<RawRecord>)>> {
    Ok(vec![
        (Year::Y2020, RawRecord::parse_csv(FIXTURE_2020)?),
        (Year::Y2022, RawRecord::parse_csv(FIXTURE_2022)?),
        (Year::Y2024, RawRecord::parse_csv(FIXTURE_2024)?),
    ])
}

/// Raw payloads selected by `source`, in chronological order.
///
/// The bundle is read first; per-year files replace bundle entries. Without
/// any payload flag the bundled fixtures are used.
pub fn raw_payloads(source: &SourceArgs) -> Result<Vec<(Year, Vec<RawRecord>)>> {
    if !source.has_payloads() {
        info!("No payloads given, using bundled fixtures");
        return fixture_payloads();
    }

    let mut payloads: Vec<(Year, Vec<RawRecord>)> = match &source.bundle {
        Some(path) => {
            let text = read_payload(path)?;
            RawRecord::parse_json_by_year(&text)
                .with_context(|| format!("Failed to parse bundle {}", path.display()))?
        }
        None => Vec::new(),
    };

    for year in Year::ALL {
        if let Some(path) = source.path_for(year) {
            info!("Loading {} from {}", year, path.display());
            let records = load_payload(path)?;
            payloads.retain(|(y, _)| *y != year);
            payloads.push((year, records));
        }
    }
    payloads.sort_by_key(|(year, _)| *year);
    Ok(payloads)
}

pub fn load_dataset(source: &SourceArgs) -> Result<Dataset> {
    let mut dataset = Dataset::new();
    for (year, raws) in raw_payloads(source)? {
        dataset.load_raw(year, &raws);
    }
    Ok(dataset)
}

pub fn load_settings(source: &SourceArgs) -> Result<DashboardSettings> {
    match &source.config {
        Some(path) => DashboardSettings::from_json_file(path),
        None => Ok(DashboardSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lulc-cmd-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(PayloadFormat::from_path(Path::new("a/b.csv")), PayloadFormat::Csv);
        assert_eq!(PayloadFormat::from_path(Path::new("b.JSON")), PayloadFormat::Json);
        assert_eq!(PayloadFormat::from_path(Path::new("b.json.gz")), PayloadFormat::Json);
        assert_eq!(PayloadFormat::from_path(Path::new("b.csv.gz")), PayloadFormat::Csv);
        assert_eq!(PayloadFormat::from_path(Path::new("noext")), PayloadFormat::Csv);
    }

    #[test]
    fn test_fixtures_when_no_flags() {
        let dataset = load_dataset(&SourceArgs::default()).unwrap();
        assert_eq!(dataset.loaded_years(), Year::ALL.to_vec());
        assert_eq!(dataset.all_site_names().len(), 4);
    }

    #[test]
    fn test_gzip_json_payload() {
        let path = temp_path("2022.json.gz");
        let json = r#"[{"Site_Name": "Z", "Water_Percent": 4.5}]"#;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(json.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let source = SourceArgs {
            year_2022: Some(path.clone()),
            ..SourceArgs::default()
        };
        let dataset = load_dataset(&source).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dataset.loaded_years(), vec![Year::Y2022]);
        let record = dataset.get("Z", Year::Y2022).unwrap();
        assert_eq!(record.percent(lulc_core::Category::Water), 4.5);
    }

    #[test]
    fn test_year_file_overrides_bundle() {
        let bundle = temp_path("bundle.json");
        std::fs::write(
            &bundle,
            r#"{"2020": [{"Site_Name": "B"}], "2024": [{"Site_Name": "B"}]}"#,
        )
        .unwrap();
        let csv = temp_path("2024.csv");
        std::fs::write(&csv, "Site_Name\nC\n").unwrap();

        let source = SourceArgs {
            bundle: Some(bundle.clone()),
            year_2024: Some(csv.clone()),
            ..SourceArgs::default()
        };
        let dataset = load_dataset(&source).unwrap();
        std::fs::remove_file(&bundle).unwrap();
        std::fs::remove_file(&csv).unwrap();

        assert!(dataset.contains("B", Year::Y2020));
        assert!(!dataset.contains("B", Year::Y2024));
        assert!(dataset.contains("C", Year::Y2024));
    }

    #[test]
    fn test_missing_file_is_error() {
        let source = SourceArgs {
            year_2020: Some(temp_path("does-not-exist.csv")),
            ..SourceArgs::default()
        };
        assert!(load_dataset(&source).is_err());
    }
}
