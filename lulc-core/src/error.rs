/// Error types for the land-use core library
use thiserror::Error;

/// Main error type for land-use payload and identifier handling.
///
/// Malformed *records* never produce one of these; they degrade to default
/// values during normalization. Only malformed payload containers and
/// identifiers outside the fixed schema are reported.
#[derive(Error, Debug)]
pub enum LandUseError {
    /// Year outside the surveyed vintages
    #[error("Unknown survey year: {0} (expected 2020, 2022 or 2024)")]
    UnknownYear(String),

    /// Category id outside the seven land-cover classes
    #[error("Unknown land-use category: {0}")]
    UnknownCategory(String),

    /// Payload has the wrong overall shape
    #[error("Failed to parse payload: {0}")]
    PayloadParse(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using LandUseError
pub type Result<T> = std::result::Result<T, LandUseError>;
