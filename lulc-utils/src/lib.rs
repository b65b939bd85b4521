//! Shared utility functions for land-use crates.

/// Lenient numeric coercion for spreadsheet-style cells.
pub mod numbers {
    /// Cell spellings that mean "no value" in exported survey sheets.
    const EMPTY_MARKERS: [&str; 7] = ["", "null", "n/a", "na", "nan", "-", "---"];

    /// Parse a cell as `f64`, returning `None` when it is not a finite number.
    ///
    /// Surrounding whitespace, a trailing `%` and thousands separators are
    /// ignored, so `" 1,203.5 "` and `"44.84%"` both parse.
    pub fn parse_number(ess: &str) -> Option<f64> {
        let ess_lowered = ess.trim().to_lowercase();
        if EMPTY_MARKERS.contains(&ess_lowered.as_str()) {
            return None;
        }
        let cleaned: String = ess_lowered
            .trim_end_matches('%')
            .trim()
            .chars()
            .filter(|c| *c != ',')
            .collect();
        cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
    }

}

/// Formatting helpers for dashboard text.
pub mod format {
    /// Format a value with a fixed number of decimals.
    pub fn fixed(value: f64, decimals: usize) -> String {
        format!("{:.*}", decimals, value)
    }

    /// Format a percentage with one decimal, e.g. `"41.1%"`.
    pub fn percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

    /// Format a percentage change with an explicit `+` for growth, e.g. `"+0.3%"`.
    pub fn signed_percent(change: f64) -> String {
        if change > 0.0 {
            format!("+{:.1}%", change)
        } else {
            format!("{:.1}%", change)
        }
    }

    /// Format an area in square kilometres, e.g. `"955.2 sq km"`.
    pub fn area_sq_km(value: f64) -> String {
        format!("{:.1} sq km", value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fixed() {
            assert_eq!(fixed(44.8412, 2), "44.84");
            assert_eq!(fixed(3.0, 0), "3");
        }

        #[test]
        fn test_signed_percent() {
            assert_eq!(signed_percent(0.34), "+0.3%");
            assert_eq!(signed_percent(-1.26), "-1.3%");
            assert_eq!(signed_percent(0.0), "0.0%");
        }

        #[test]
        fn test_area_and_percent() {
            assert_eq!(area_sq_km(1208.76), "1208.8 sq km");
            assert_eq!(percent(41.1), "41.1%");
        }
    }
}
