//! Canonical land-use types and the normalization layer.
//!
//! Raw per-vintage survey rows arrive with inconsistent headers. This crate
//! maps them onto one schema:
//!
//! - [`raw`]: schema-less [`RawRecord`](raw::RawRecord)s parsed from CSV or JSON payloads
//! - [`field`]: canonical fields and the alias table of accepted header spellings
//! - [`resolver`]: alias lookup (exact match first, then case-insensitive)
//! - [`normalize`]: raw record to [`SiteYearRecord`](record::SiteYearRecord), including the 2024 Class 11 rule
//! - [`category`]: the seven land-cover classes and the user's selection set

pub mod category;
pub mod error;
pub mod field;
pub mod normalize;
pub mod raw;
pub mod record;
pub mod resolver;
pub mod year;

pub use category::{Category, CategoryInfo, SelectedCategories};
pub use error::{LandUseError, Result};
pub use record::{CategoryMeasure, SiteYearRecord, UNKNOWN_SITE};
pub use year::Year;
