use crate::error::LandUseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the seven land-cover classes.
///
/// The declaration order is the registry order used everywhere a list of
/// categories is produced (chart series, cards, coverage sums).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Water,
    Trees,
    FloodVegetation,
    Crops,
    BuiltArea,
    BareGround,
    Rangeland,
}

/// Static display and schema metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    /// Stable id used by UI controls (e.g. `"builtArea"`).
    pub id: &'static str,
    /// Human-readable label (e.g. `"Built Area"`).
    pub label: &'static str,
    /// Canonical raw header for the area column.
    pub area_key: &'static str,
    /// Canonical raw header for the percent column.
    pub percent_key: &'static str,
    /// Hex color for chart series and cards.
    pub color: &'static str,
    /// Icon reference (Font Awesome class).
    pub icon: &'static str,
}

const REGISTRY: [CategoryInfo; 7] = [
    CategoryInfo {
        category: Category::Water,
        id: "water",
        label: "Water",
        area_key: "Water_Area",
        percent_key: "Water_Percent",
        color: "#3498db",
        icon: "fas fa-tint",
    },
    CategoryInfo {
        category: Category::Trees,
        id: "trees",
        label: "Trees",
        area_key: "Trees_Area",
        percent_key: "Trees_Percent",
        color: "#27ae60",
        icon: "fas fa-tree",
    },
    CategoryInfo {
        category: Category::FloodVegetation,
        id: "floodVegetation",
        label: "Flood Vegetation",
        area_key: "FloodVegetation_Area",
        percent_key: "FloodVegetation_Percent",
        color: "#1abc9c",
        icon: "fas fa-water",
    },
    CategoryInfo {
        category: Category::Crops,
        id: "crops",
        label: "Crops",
        area_key: "Crops_Area",
        percent_key: "Crops_Percent",
        color: "#f1c40f",
        icon: "fas fa-seedling",
    },
    CategoryInfo {
        category: Category::BuiltArea,
        id: "builtArea",
        label: "Built Area",
        area_key: "BuiltArea_Area",
        percent_key: "BuiltArea_Percent",
        color: "#e74c3c",
        icon: "fas fa-building",
    },
    CategoryInfo {
        category: Category::BareGround,
        id: "bareGround",
        label: "Bare Ground",
        area_key: "BareGround_Area",
        percent_key: "BareGround_Percent",
        color: "#95a5a6",
        icon: "fas fa-mountain",
    },
    CategoryInfo {
        category: Category::Rangeland,
        id: "rangeland",
        label: "Rangeland",
        area_key: "Rangeland_Area",
        percent_key: "Rangeland_Percent",
        color: "#8e44ad",
        icon: "fas fa-paw",
    },
];

impl Category {
    /// All categories in registry order.
    pub const ALL: [Category; 7] = [
        Category::Water,
        Category::Trees,
        Category::FloodVegetation,
        Category::Crops,
        Category::BuiltArea,
        Category::BareGround,
        Category::Rangeland,
    ];

    /// Position in the registry, also the slot in a record's breakdown.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static CategoryInfo {
        &REGISTRY[self.index()]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    /// Header stem without separators, e.g. `"BuiltArea"`.
    pub fn compact_stem(self) -> &'static str {
        self.info()
            .percent_key
            .trim_end_matches("_Percent")
    }

    /// The full registry, in order.
    pub fn registry() -> &'static [CategoryInfo; 7] {
        &REGISTRY
    }
}

impl FromStr for Category {
    type Err = LandUseError;

    /// Accepts ids (`builtArea`), labels (`Built Area`) and snake/kebab case
    /// (`built_area`, `built-area`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id().to_lowercase() == squashed)
            .ok_or_else(|| LandUseError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's current category selection.
///
/// Only [`toggle`](Self::toggle) and the constructors change membership.
/// Iteration is always in registry order, independent of toggle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCategories {
    selected: BTreeSet<Category>,
}

impl Default for SelectedCategories {
    fn default() -> Self {
        Self::all()
    }
}

impl SelectedCategories {
    pub fn all() -> Self {
        Self {
            selected: Category::ALL.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    /// Flip membership of `category`, returning whether it is now selected.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.selected.remove(&category) {
            false
        } else {
            self.selected.insert(category);
            true
        }
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<Category> for SelectedCategories {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
