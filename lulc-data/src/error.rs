/// Error types for derived queries
use lulc_core::Year;
use thiserror::Error;

/// Failures of queries that cannot produce a meaningful number.
///
/// Most queries treat absent data as `0` instead; only ratio-style queries
/// report it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The baseline total area is zero, so a relative change is undefined
    #[error("Area change undefined for {site}: total area in {year} is 0")]
    DivisionUndefined { site: String, year: Year },

    /// The site has no record for the requested vintage
    #[error("No record for site {site} in {year}")]
    UnknownSite { site: String, year: Year },
}
