//! 12-month storage-year simulation.
//!
//! The storage year starts in September, when cattle typically come back
//! inside. February is fixed at 28 days; the tool does not model leap
//! years. Rainwater and washings are spread uniformly across the year
//! even though livestock production varies with days in month.

use crate::domain::model::{
    ExcretaTotals, MonthStatus, MonthlyBreakdown, RainwaterTotals, SeparatorConfig,
    StorageVolumes, WashingsTotals,
};

/// Month labels for the storage year, September first.
pub const MONTHS: [&str; 12] = [
    "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
];

/// Canonical day counts matching [`MONTHS`].
pub const DAYS_IN_MONTH: [u32; 12] = [30, 31, 30, 31, 31, 28, 31, 30, 31, 30, 31, 31];

/// Remaining capacity below this share of the total flags a month as
/// running low.
const LOW_CAPACITY_FRACTION: f64 = 0.2;

/// Distributes annual production across the storage year and tracks the
/// remaining capacity month by month.
pub fn monthly_breakdown(
    excreta: &ExcretaTotals,
    rainwater: &RainwaterTotals,
    washings: &WashingsTotals,
    storage: &StorageVolumes,
    separator: &SeparatorConfig,
) -> MonthlyBreakdown {
    let daily_slurry_m3 = excreta.daily_excreta_l / 1000.0;
    let separator_factor = if separator.in_use {
        1.0 - separator.reduction_percent / 100.0
    } else {
        1.0
    };

    let rainwater_per_month = rainwater.collected_m3 / 12.0;
    let washings_per_month = (washings.parlour_m3 + washings.pig_m3) / 12.0;

    let mut production_m3 = [0.0; 12];
    let mut remaining_m3 = [0.0; 12];
    let mut status = [MonthStatus::Ok; 12];

    let mut remaining = storage.total_m3;
    for (i, days) in DAYS_IN_MONTH.iter().enumerate() {
        let livestock_slurry = daily_slurry_m3 * f64::from(*days) * separator_factor;
        let production = livestock_slurry + rainwater_per_month + washings_per_month;

        remaining -= production;
        production_m3[i] = production;
        remaining_m3[i] = remaining;
        status[i] = classify_month(remaining, storage.total_m3);
    }

    let storage_months = remaining_m3.iter().filter(|&&r| r > 0.0).count() as u32;

    MonthlyBreakdown {
        production_m3,
        remaining_m3,
        status,
        storage_months,
    }
}

fn classify_month(remaining_m3: f64, total_capacity_m3: f64) -> MonthStatus {
    if remaining_m3 < 0.0 {
        MonthStatus::Overflow
    } else if remaining_m3 < total_capacity_m3 * LOW_CAPACITY_FRACTION {
        MonthStatus::LowCapacity
    } else {
        MonthStatus::Ok
    }
}
