//! In-memory rainfall and settings tables.
//!
//! Rainfall data arrives as CSV keyed by 4-figure grid reference with one
//! column per month. The table is resolved once, up front, by a
//! [`RainfallSource`](crate::domain::ports::RainfallSource); the
//! calculators only ever see this in-memory form.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::utils::error::Result;

/// Row key used for the fallback profile shipped inside rainfall CSVs.
pub const DEFAULT_GRID_KEY: &str = "DEFAULT";

/// Built-in monthly rainfall profile (mm, Jan-Dec) used when no rainfall
/// table is available at all. Roughly a lowland UK average year.
pub const DEFAULT_PROFILE: [f64; 12] = [
    83.0, 62.0, 66.0, 57.0, 56.0, 62.0, 64.0, 71.0, 68.0, 91.0, 92.0, 89.0,
];

/// Regulatory bounds on the maximum likely 2-day rainfall figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainfallLimits {
    pub upper_mm: f64,
    pub lower_mm: f64,
}

impl Default for RainfallLimits {
    fn default() -> Self {
        Self {
            upper_mm: 100.0,
            lower_mm: 50.0,
        }
    }
}

impl RainfallLimits {
    /// Parses a `setting_name,setting_value` CSV. Unknown settings are
    /// ignored; missing ones keep their defaults.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut limits = Self::default();
        let mut reader = csv::Reader::from_reader(data.as_bytes());

        for record in reader.records() {
            let record = record?;
            let name = record.get(0).unwrap_or("").trim();
            let value = record.get(1).and_then(|v| v.trim().parse::<f64>().ok());

            match (name, value) {
                ("upper_rainfall_limit", Some(v)) => limits.upper_mm = v,
                ("lower_rainfall_limit", Some(v)) => limits.lower_mm = v,
                _ => {}
            }
        }

        Ok(limits)
    }
}

/// Monthly rainfall profiles keyed by 4-figure grid reference.
#[derive(Debug, Clone, Default)]
pub struct RainfallTable {
    rows: HashMap<String, [f64; 12]>,
}

impl RainfallTable {
    /// An empty table; every lookup resolves to [`DEFAULT_PROFILE`].
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parses a `grid_reference,<12 monthly columns>` CSV.
    ///
    /// Rows with fewer than 12 month columns are skipped; blank or
    /// non-numeric month cells read as zero, matching the lenient
    /// handling of partially-filled source spreadsheets.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut rows = HashMap::new();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes());

        for record in reader.records() {
            let record = record?;
            let grid_ref = record.get(0).unwrap_or("").trim();
            if grid_ref.is_empty() {
                continue;
            }
            if record.len() < 13 {
                tracing::warn!(
                    "Skipping rainfall row '{}': expected 12 monthly values, got {}",
                    grid_ref,
                    record.len().saturating_sub(1)
                );
                continue;
            }

            let mut months = [0.0; 12];
            for (i, cell) in record.iter().skip(1).take(12).enumerate() {
                months[i] = cell.trim().parse::<f64>().unwrap_or(0.0);
            }
            rows.insert(grid_ref.to_string(), months);
        }

        Ok(Self { rows })
    }

    /// The profile for a grid reference, falling back to the table's
    /// `DEFAULT` row, then to the built-in profile.
    pub fn profile(&self, grid_ref: &str) -> [f64; 12] {
        if let Some(profile) = self.rows.get(grid_ref) {
            return *profile;
        }
        if let Some(profile) = self.rows.get(DEFAULT_GRID_KEY) {
            tracing::debug!("No rainfall row for '{}', using table default", grid_ref);
            return *profile;
        }
        tracing::debug!("No rainfall row for '{}', using built-in profile", grid_ref);
        DEFAULT_PROFILE
    }

    /// Annual rainfall (mm) for a grid reference.
    pub fn annual_total(&self, grid_ref: &str) -> f64 {
        self.profile(grid_ref).iter().sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

static GRID_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());
static GRID_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Derives the 4-figure grid reference used to key rainfall rows from a
/// 10-figure reference, e.g. `"SJ 12345 67890"` -> `"SJ1267"`.
///
/// Takes the letter prefix plus the first two digits of the easting and
/// northing groups. Returns `None` when the reference is too short to
/// slice that way.
pub fn derive_four_figure(ten_figure: &str) -> Option<String> {
    let letters = GRID_LETTERS.find(ten_figure)?.as_str();
    let digits: Vec<&str> = GRID_DIGITS
        .find_iter(ten_figure)
        .map(|m| m.as_str())
        .collect();

    if digits.len() < 2 || digits[0].len() < 2 || digits[1].len() < 2 {
        return None;
    }

    Some(format!("{}{}{}", letters, &digits[0][..2], &digits[1][..2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
grid_reference,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec
SJ1267,100,90,80,70,60,50,60,70,80,90,100,110
DEFAULT,70,60,60,55,55,60,65,70,70,85,90,85
";

    #[test]
    fn parses_rows_and_sums_annual_total() {
        let table = RainfallTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.annual_total("SJ1267"), 960.0);
    }

    #[test]
    fn unmatched_grid_ref_uses_table_default_row() {
        let table = RainfallTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.profile("ZZ0000")[0], 70.0);
    }

    #[test]
    fn empty_table_uses_builtin_profile() {
        let table = RainfallTable::builtin();
        assert_eq!(table.profile("SJ1267"), DEFAULT_PROFILE);
        assert!(table.is_empty());
    }

    #[test]
    fn short_rows_and_bad_cells_are_tolerated() {
        let csv = "\
grid_reference,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec
SHORT,1,2,3
SJ1267,100,n/a,80,70,60,50,60,70,80,90,100,110
";
        let table = RainfallTable::from_csv(csv).unwrap();
        assert_eq!(table.len(), 1);
        // The unparseable February cell reads as zero.
        assert_eq!(table.profile("SJ1267")[1], 0.0);
    }

    #[test]
    fn settings_csv_overrides_limits() {
        let csv = "\
setting_name,setting_value
upper_rainfall_limit,90
lower_rainfall_limit,40
irrelevant_setting,123
";
        let limits = RainfallLimits::from_csv(csv).unwrap();
        assert_eq!(limits.upper_mm, 90.0);
        assert_eq!(limits.lower_mm, 40.0);
    }

    #[test]
    fn settings_csv_defaults_when_rows_missing() {
        let limits = RainfallLimits::from_csv("setting_name,setting_value\n").unwrap();
        assert_eq!(limits, RainfallLimits::default());
    }

    #[test]
    fn derives_four_figure_reference() {
        assert_eq!(derive_four_figure("SJ 12345 67890").as_deref(), Some("SJ1267"));
        // Without separated easting/northing groups there is nothing to slice.
        assert_eq!(derive_four_figure("SJ1234567890"), None);
        assert_eq!(derive_four_figure("SJ12"), None);
        assert_eq!(derive_four_figure(""), None);
    }
}
