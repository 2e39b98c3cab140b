//! Rainwater and washwater contributions to the store.

use crate::data::rainfall::{RainfallLimits, RainfallTable};
use crate::domain::model::{FarmDetails, FarmSnapshot, RainwaterTotals, WashingsTotals};

/// Gradient of the annual-rainfall to 2-day-maximum regression.
pub const RAINFALL_GRADIENT: f64 = 0.046;

/// Intercept of the same regression (mm).
pub const RAINFALL_INTERCEPT_MM: f64 = 25.0;

/// Flat washwater rate applied on the preset pig-washings path
/// (litres per head per day).
pub const PRESET_PIG_WASH_RATE: f64 = 7.0;

/// Resolves the maximum likely 2-day rainfall figure (mm).
///
/// A positive override wins outright. Otherwise the annual rainfall for
/// the farm's 4-figure grid reference feeds the regression
/// `annual × 0.046 + 25`, clamped to the regulatory floor/ceiling from
/// the settings table. The clamp must hold for any input profile.
pub fn resolve_max_rainfall(
    farm: &FarmDetails,
    table: &RainfallTable,
    limits: &RainfallLimits,
) -> f64 {
    if let Some(override_mm) = farm.max_rainfall_override {
        if override_mm > 0.0 {
            return override_mm;
        }
    }

    let annual = table.annual_total(&farm.grid_reference_4fig);
    let calculated = annual * RAINFALL_GRADIENT + RAINFALL_INTERCEPT_MM;
    calculated.clamp(limits.lower_mm, limits.upper_mm)
}

/// Rainwater collected from yard and roof catchments over the storage
/// year, per surface and in total (m³).
pub fn rainwater_totals(
    snapshot: &FarmSnapshot,
    table: &RainfallTable,
    limits: &RainfallLimits,
) -> RainwaterTotals {
    let yard_area_m2 = snapshot.total_yard_area();
    let roof_area_m2 = snapshot.total_roof_area();
    let max_rainfall_mm = resolve_max_rainfall(&snapshot.farm, table, limits);

    let yard_rainwater_m3 = yard_area_m2 * (max_rainfall_mm / 1000.0);
    let roof_rainwater_m3 = roof_area_m2 * (max_rainfall_mm / 1000.0);

    RainwaterTotals {
        yard_area_m2,
        roof_area_m2,
        max_rainfall_mm,
        yard_rainwater_m3,
        roof_rainwater_m3,
        collected_m3: yard_rainwater_m3 + roof_rainwater_m3,
    }
}

/// Annual parlour and pig washwater volumes (m³/yr).
pub fn washings_totals(snapshot: &FarmSnapshot) -> WashingsTotals {
    let washings = &snapshot.washings;

    let parlour_m3 = if washings.include_parlour {
        f64::from(snapshot.farm.cows_in_milk) * washings.parlour_litres_per_cow * 365.0 / 1000.0
    } else {
        0.0
    };

    let pig_m3 = if !washings.include_pig_wash {
        0.0
    } else if washings.use_preset_pig_rates {
        // TODO: apply the per-category rates in `washings.pig_rates` once
        // pig place counts are captured; until then the preset path keeps
        // the flat rate against the cattle herd count.
        f64::from(snapshot.farm.cattle_in_herd) * PRESET_PIG_WASH_RATE * 365.0 / 1000.0
    } else {
        washings.pig_wash_total_l * 365.0 / 1000.0
    };

    WashingsTotals { parlour_m3, pig_m3 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Catchment, CatchmentKind, WashingsConfig};
    use approx::assert_relative_eq;

    fn farm_with_grid(grid_4fig: &str) -> FarmDetails {
        FarmDetails {
            grid_reference_4fig: grid_4fig.to_string(),
            ..FarmDetails::default()
        }
    }

    fn table_with_annual(grid_4fig: &str, monthly: f64) -> RainfallTable {
        let header = "grid_reference,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec";
        let row = format!("{},{}", grid_4fig, vec![monthly.to_string(); 12].join(","));
        RainfallTable::from_csv(&format!("{}\n{}\n", header, row)).unwrap()
    }

    #[test]
    fn positive_override_wins() {
        let mut farm = farm_with_grid("SJ1267");
        farm.max_rainfall_override = Some(73.0);
        let rainfall =
            resolve_max_rainfall(&farm, &RainfallTable::builtin(), &RainfallLimits::default());
        assert_eq!(rainfall, 73.0);
    }

    #[test]
    fn non_positive_override_falls_through_to_lookup() {
        let mut farm = farm_with_grid("SJ1267");
        farm.max_rainfall_override = Some(0.0);
        // 12 * 100 = 1200 mm/yr -> 1200*0.046+25 = 80.2
        let table = table_with_annual("SJ1267", 100.0);
        let rainfall = resolve_max_rainfall(&farm, &table, &RainfallLimits::default());
        assert_relative_eq!(rainfall, 80.2, epsilon = 1e-9);
    }

    #[test]
    fn resolved_rainfall_respects_clamp_bounds() {
        let limits = RainfallLimits::default();

        // Desert-dry profile clamps up to the floor.
        let dry = table_with_annual("SJ1267", 0.0);
        let low = resolve_max_rainfall(&farm_with_grid("SJ1267"), &dry, &limits);
        assert_eq!(low, limits.lower_mm);

        // Monsoon profile clamps down to the ceiling.
        let wet = table_with_annual("SJ1267", 1000.0);
        let high = resolve_max_rainfall(&farm_with_grid("SJ1267"), &wet, &limits);
        assert_eq!(high, limits.upper_mm);
    }

    #[test]
    fn rainwater_split_between_yard_and_roof() {
        let mut snapshot = FarmSnapshot {
            farm: farm_with_grid("SJ1267"),
            catchments: vec![
                Catchment {
                    kind: CatchmentKind::Yard,
                    area_m2: 500.0,
                    description: String::new(),
                },
                Catchment {
                    kind: CatchmentKind::Roof,
                    area_m2: 1500.0,
                    description: String::new(),
                },
            ],
            ..FarmSnapshot::default()
        };
        snapshot.farm.max_rainfall_override = Some(80.0);

        let totals =
            rainwater_totals(&snapshot, &RainfallTable::builtin(), &RainfallLimits::default());
        assert_relative_eq!(totals.yard_rainwater_m3, 40.0, epsilon = 1e-9);
        assert_relative_eq!(totals.roof_rainwater_m3, 120.0, epsilon = 1e-9);
        assert_relative_eq!(totals.collected_m3, 160.0, epsilon = 1e-9);
    }

    #[test]
    fn parlour_washings_require_the_toggle() {
        let mut snapshot = FarmSnapshot::default();
        snapshot.farm.cows_in_milk = 100;
        snapshot.washings = WashingsConfig {
            include_parlour: false,
            ..WashingsConfig::default()
        };
        assert_eq!(washings_totals(&snapshot).parlour_m3, 0.0);

        snapshot.washings.include_parlour = true;
        // 100 cows * 20 l/day * 365 / 1000 = 730 m³/yr
        assert_relative_eq!(washings_totals(&snapshot).parlour_m3, 730.0, epsilon = 1e-9);
    }

    #[test]
    fn preset_pig_washings_use_flat_rate_against_herd() {
        let mut snapshot = FarmSnapshot::default();
        snapshot.farm.cattle_in_herd = 200;
        snapshot.washings.include_pig_wash = true;
        snapshot.washings.use_preset_pig_rates = true;

        // 200 head * 7 l/day * 365 / 1000 = 511 m³/yr
        assert_relative_eq!(washings_totals(&snapshot).pig_m3, 511.0, epsilon = 1e-9);
    }

    #[test]
    fn manual_pig_washings_use_entered_total() {
        let mut snapshot = FarmSnapshot::default();
        snapshot.washings.include_pig_wash = true;
        snapshot.washings.use_preset_pig_rates = false;
        snapshot.washings.pig_wash_total_l = 100.0;

        assert_relative_eq!(washings_totals(&snapshot).pig_m3, 36.5, epsilon = 1e-9);
    }
}
