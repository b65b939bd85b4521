use crate::error::LandUseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A survey vintage.
///
/// The schema only knows three vintages; anything else is a caller error and
/// is rejected when parsing rather than silently producing empty data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Year {
    Y2020,
    Y2022,
    Y2024,
}

impl Year {
    /// All vintages in chronological order.
    pub const ALL: [Year; 3] = [Year::Y2020, Year::Y2022, Year::Y2024];

    pub fn as_u16(self) -> u16 {
        match self {
            Year::Y2020 => 2020,
            Year::Y2022 => 2022,
            Year::Y2024 => 2024,
        }
    }

    /// The vintage whose raw payload may carry the `Class 11` columns.
    pub fn has_class_11_override(self) -> bool {
        self == Year::Y2024
    }
}

impl TryFrom<u16> for Year {
    type Error = LandUseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2020 => Ok(Year::Y2020),
            2022 => Ok(Year::Y2022),
            2024 => Ok(Year::Y2024),
            other => Err(LandUseError::UnknownYear(other.to_string())),
        }
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.as_u16()
    }
}

impl FromStr for Year {
    type Err = LandUseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map_err(|_| LandUseError::UnknownYear(s.to_string()))
            .and_then(Year::try_from)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
