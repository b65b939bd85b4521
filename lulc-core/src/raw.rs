//! Schema-less survey rows as delivered by a data source.
//!
//! A [`RawRecord`] keeps the source's keys verbatim (spelling, case, spacing)
//! in source order. Nothing here interprets the keys; that is the job of the
//! [`resolver`](crate::resolver).

use crate::error::{LandUseError, Result};
use crate::year::Year;
use lulc_utils::numbers::parse_number;
use serde_json::Value;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Present key with no value (empty CSV cell, JSON `null`).
    Null,
}

impl RawValue {
    /// Numeric view of the cell; `None` for empty cells and non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Number(_) => None,
            RawValue::Text(s) => parse_number(s),
            RawValue::Null => None,
        }
    }

    /// Text view of the cell, trimmed; `None` for empty cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Number(n) => Some(n.to_string()),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            RawValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Number(n) => n.as_f64().map(RawValue::Number).unwrap_or(RawValue::Null),
            Value::String(s) => RawValue::Text(s.clone()),
            other => RawValue::Text(other.to_string()),
        }
    }
}

/// One survey row: an ordered list of `(key, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(key, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// Set `key` to `value`, replacing an existing entry with the exact same key.
    pub fn insert<K: Into<String>, V: Into<RawValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a CSV payload with a header row into raw records.
    ///
    /// Header cells are trimmed; data cells are kept as text. Empty cells
    /// become [`RawValue::Null`]. Short rows simply lack the trailing keys.
    ///
    /// # Example CSV
    /// ```text
    /// Site_Name,Total_Area_sq_km,Water_Percent
    /// Adigrat University,1850.25,0.07
    /// ```
    pub fn parse_csv(csv_data: &str) -> Result<Vec<RawRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(csv_data.as_bytes());
        let headers = rdr.headers()?.clone();

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let mut record = RawRecord::new();
            for (key, cell) in headers.iter().zip(row.iter()) {
                if cell.trim().is_empty() {
                    record.insert(key, RawValue::Null);
                } else {
                    record.insert(key, cell);
                }
            }
            records.push(record);
        }
        log::debug!("raw: parsed {} CSV records", records.len());
        Ok(records)
    }

    /// Parse a JSON array of objects into raw records.
    ///
    /// Array elements that are not objects become empty records, which
    /// normalize to an all-default "Unknown Site" row.
    pub fn parse_json(json_data: &str) -> Result<Vec<RawRecord>> {
        let value: Value = serde_json::from_str(json_data)?;
        match value {
            Value::Array(items) => Ok(items.iter().map(RawRecord::from_json_value).collect()),
            _ => Err(LandUseError::PayloadParse(
                "expected a JSON array of objects".to_string(),
            )),
        }
    }

    /// Parse a JSON object keyed by vintage (`{"2020": [...], "2024": [...]}`).
    ///
    /// Keys that are not a known vintage are rejected.
    pub fn parse_json_by_year(json_data: &str) -> Result<Vec<(Year, Vec<RawRecord>)>> {
        let value: Value = serde_json::from_str(json_data)?;
        let Value::Object(map) = value else {
            return Err(LandUseError::PayloadParse(
                "expected a JSON object keyed by survey year".to_string(),
            ));
        };
        let mut out = Vec::with_capacity(map.len());
        for (key, rows) in &map {
            let year: Year = key.parse()?;
            let Value::Array(items) = rows else {
                return Err(LandUseError::PayloadParse(format!(
                    "expected an array of records for {}",
                    year
                )));
            };
            out.push((year, items.iter().map(RawRecord::from_json_value).collect()));
        }
        out.sort_by_key(|(year, _)| *year);
        Ok(out)
    }

    fn from_json_value(value: &Value) -> RawRecord {
        match value {
            Value::Object(map) => {
                RawRecord::from_pairs(map.iter().map(|(k, v)| (k.clone(), RawValue::from(v))))
            }
            other => {
                log::warn!("raw: skipping non-object JSON record: {}", other);
                RawRecord::new()
            }
        }
    }
}
