//! Livestock excreta and nitrogen aggregation.

use crate::domain::model::{ExcretaTotals, LivestockEntry};

/// Days assumed in the storage year for annualised volumes.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Aggregates daily excreta (scaled by the slurry-capture percentage)
/// and annual nitrogen (deliberately not scaled: nitrogen excretion is
/// total output regardless of how much ends up as slurry) across the
/// livestock list. Entries with no head count contribute nothing.
pub fn excreta_totals(livestock: &[LivestockEntry]) -> ExcretaTotals {
    let mut daily_excreta_l = 0.0;
    let mut nitrogen_kg = 0.0;

    for entry in livestock {
        if entry.head_count == 0 {
            continue;
        }
        let heads = f64::from(entry.head_count);
        daily_excreta_l += entry.daily_excreta_l * heads * (entry.slurry_percent / 100.0);
        nitrogen_kg += entry.annual_nitrogen_kg * heads;
    }

    ExcretaTotals {
        daily_excreta_l,
        annual_slurry_m3: daily_excreta_l * DAYS_PER_YEAR / 1000.0,
        nitrogen_kg,
    }
}
