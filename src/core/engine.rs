//! The orchestrator: one pure pass from input snapshot to result.

use crate::core::{compliance, excreta, monthly, rainwater, volume};
use crate::data::rainfall::{RainfallLimits, RainfallTable};
use crate::domain::model::{CalculationResult, FarmSnapshot};

/// Runs the full calculation pipeline over an input snapshot.
///
/// Volume, excreta and rainwater/washings are independent of each other;
/// the monthly simulation depends on all three, and the compliance
/// evaluation on the simulation and the excreta totals. The function is
/// pure: callers that recompute on every input change get last-write-wins
/// semantics by simply discarding results for superseded snapshots.
pub fn compute(
    snapshot: &FarmSnapshot,
    table: &RainfallTable,
    limits: &RainfallLimits,
) -> CalculationResult {
    let storage = volume::storage_volumes(&snapshot.stores);
    let excreta = excreta::excreta_totals(&snapshot.livestock);
    let rainwater = rainwater::rainwater_totals(snapshot, table, limits);
    let washings = rainwater::washings_totals(snapshot);

    tracing::debug!(
        "Storage {:.1} m³, excreta {:.0} l/day, rainfall {:.0} mm",
        storage.total_m3,
        excreta.daily_excreta_l,
        rainwater.max_rainfall_mm
    );

    let monthly = monthly::monthly_breakdown(
        &excreta,
        &rainwater,
        &washings,
        &storage,
        &snapshot.separator,
    );
    let compliance = compliance::evaluate(
        snapshot.farm.farmable_area_ha,
        &excreta,
        &rainwater,
        &monthly,
    );

    CalculationResult {
        storage,
        excreta,
        rainwater,
        washings,
        monthly,
        compliance,
    }
}
