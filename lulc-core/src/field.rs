//! Canonical fields and the table of raw header spellings accepted for each.

use crate::category::Category;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A schema-stable logical attribute of a site-year record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    SiteName,
    TotalAreaSqKm,
    Area(Category),
    Percent(Category),
}

impl CanonicalField {
    /// Every canonical field: name, total area, then area/percent per category.
    pub fn all() -> Vec<CanonicalField> {
        let mut fields = vec![CanonicalField::SiteName, CanonicalField::TotalAreaSqKm];
        for category in Category::ALL {
            fields.push(CanonicalField::Area(category));
            fields.push(CanonicalField::Percent(category));
        }
        fields
    }

    /// The canonical raw header, e.g. `"BuiltArea_Percent"`.
    pub fn canonical_key(self) -> &'static str {
        match self {
            CanonicalField::SiteName => "Site_Name",
            CanonicalField::TotalAreaSqKm => "Total_Area_sq_km",
            CanonicalField::Area(category) => category.info().area_key,
            CanonicalField::Percent(category) => category.info().percent_key,
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_key())
    }
}

/// Accepted spellings of the 2024 `Class 11` percent column.
pub const CLASS_11_PERCENT_ALIASES: [&str; 7] = [
    "Class_11_Percent",
    "Class11_Percent",
    "Class 11 Percent",
    "Class_11 Percent",
    "Class 11 %",
    "Class_11_%",
    "Class11Percent",
];

/// Accepted spellings of the 2024 `Class 11` area column.
pub const CLASS_11_AREA_ALIASES: [&str; 5] = [
    "Class_11_Area",
    "Class11_Area",
    "Class 11 Area",
    "Class_11 Area",
    "Class11Area",
];

const SITE_NAME_ALIASES: [&str; 5] = ["Site_Name", "Site Name", "SiteName", "Site", "Name"];

const TOTAL_AREA_ALIASES: [&str; 12] = [
    "Total_Area_sq_km",
    "Total Area sq km",
    "Total_Area_sq_km ",
    "Total_Area_sqkm",
    "Total Area (sq km)",
    "Total_Area (sq km)",
    "Total_Area_km2",
    "Total Area (km2)",
    "Total Area km2",
    "TotalArea",
    "Total_Area",
    "Total Area",
];

/// Map from canonical field to its ordered list of accepted raw spellings.
///
/// Order is preference: the resolver returns the first alias present.
#[derive(Debug, Clone)]
pub struct FieldAliasTable {
    aliases: HashMap<CanonicalField, Vec<String>>,
}

impl Default for FieldAliasTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl FieldAliasTable {
    /// The shared table covering every spelling seen in the survey exports.
    pub fn standard() -> &'static FieldAliasTable {
        static TABLE: OnceLock<FieldAliasTable> = OnceLock::new();
        TABLE.get_or_init(FieldAliasTable::build_standard)
    }

    fn build_standard() -> FieldAliasTable {
        let mut aliases = HashMap::new();
        aliases.insert(CanonicalField::SiteName, to_owned(&SITE_NAME_ALIASES));
        aliases.insert(CanonicalField::TotalAreaSqKm, to_owned(&TOTAL_AREA_ALIASES));
        for category in Category::ALL {
            aliases.insert(CanonicalField::Percent(category), percent_spellings(category));
            aliases.insert(CanonicalField::Area(category), area_spellings(category));
        }
        FieldAliasTable { aliases }
    }

    /// Accepted spellings for `field`, most preferred first.
    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Put extra spellings for `field` ahead of the existing ones.
    pub fn prepend_aliases<I, S>(&mut self, field: CanonicalField, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let existing = self.aliases.remove(&field).unwrap_or_default();
        let mut merged: Vec<String> = extra.into_iter().map(Into::into).collect();
        for alias in existing {
            if !merged.contains(&alias) {
                merged.push(alias);
            }
        }
        self.aliases.insert(field, merged);
    }
}

fn to_owned(spellings: &[&str]) -> Vec<String> {
    spellings.iter().map(|s| s.to_string()).collect()
}

fn push_unique(out: &mut Vec<String>, candidate: String) {
    if !out.contains(&candidate) {
        out.push(candidate);
    }
}

fn percent_spellings(category: Category) -> Vec<String> {
    let compact = category.compact_stem();
    let spaced = category.label();
    let snake = spaced.replace(' ', "_");
    let mut out = Vec::new();
    push_unique(&mut out, category.info().percent_key.to_string());
    for stem in [compact, spaced, snake.as_str()] {
        push_unique(&mut out, format!("{}_Percent", stem));
        push_unique(&mut out, format!("{} Percent", stem));
        push_unique(&mut out, format!("{}Percent", stem));
        push_unique(&mut out, format!("{}_%", stem));
        push_unique(&mut out, format!("{} %", stem));
        push_unique(&mut out, format!("{} (%)", stem));
        push_unique(&mut out, format!("{}%", stem));
        push_unique(&mut out, format!("{}_Pct", stem));
    }
    out
}

fn area_spellings(category: Category) -> Vec<String> {
    let compact = category.compact_stem();
    let spaced = category.label();
    let snake = spaced.replace(' ', "_");
    let mut out = Vec::new();
    push_unique(&mut out, category.info().area_key.to_string());
    for stem in [compact, spaced, snake.as_str()] {
        push_unique(&mut out, format!("{}_Area", stem));
        push_unique(&mut out, format!("{} Area", stem));
        push_unique(&mut out, format!("{}Area", stem));
        push_unique(&mut out, format!("{}_Area_sq_km", stem));
        push_unique(&mut out, format!("{} Area (sq km)", stem));
        push_unique(&mut out, format!("{}_sq_km", stem));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_is_first_alias() {
        let table = FieldAliasTable::standard();
        for field in CanonicalField::all() {
            assert_eq!(table.aliases(field)[0], field.canonical_key(), "{}", field);
        }
    }

    #[test]
    fn test_all_fields_count() {
        assert_eq!(CanonicalField::all().len(), 2 + 7 * 2);
    }

    #[test]
    fn test_spaced_and_snake_spellings_present() {
        let table = FieldAliasTable::standard();
        let built = table.aliases(CanonicalField::Percent(Category::BuiltArea));
        assert!(built.iter().any(|a| a == "Built Area Percent"));
        assert!(built.iter().any(|a| a == "Built_Area_Percent"));
        assert!(built.iter().any(|a| a == "BuiltArea %"));
        let bare = table.aliases(CanonicalField::Area(Category::BareGround));
        assert!(bare.iter().any(|a| a == "Bare Ground Area"));
    }

    #[test]
    fn test_no_duplicate_spellings() {
        let table = FieldAliasTable::standard();
        let water = table.aliases(CanonicalField::Percent(Category::Water));
        let mut sorted = water.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), water.len());
    }

    #[test]
    fn test_prepend_aliases() {
        let mut table = FieldAliasTable::default();
        table.prepend_aliases(CanonicalField::SiteName, ["Location", "Site"]);
        let names = table.aliases(CanonicalField::SiteName);
        assert_eq!(names[0], "Location");
        assert_eq!(names[1], "Site");
        assert_eq!(names.iter().filter(|a| *a == "Site").count(), 1);
    }
}
