//! Input snapshot and result model.
//!
//! Everything here is an immutable value snapshot: the caller assembles a
//! [`FarmSnapshot`], hands it to [`compute`](crate::core::engine::compute),
//! and receives a fresh [`CalculationResult`]. Nothing persists between
//! calls.

use serde::{Deserialize, Serialize};

use crate::data::reference;
use crate::data::rainfall;

/// Financial rates carried on the farm record. The calculators do not
/// consume these; they ride along for downstream costing tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FinancialRates {
    pub depreciation: f64,
    pub interest_rate: f64,
    pub water_cost: f64,
    pub slurry_spreading_cost: f64,
    pub water_storage_cost: f64,
    pub divert_water_cost: f64,
    pub roofing_cost: f64,
    pub slurry_store_cost: f64,
}

impl Default for FinancialRates {
    fn default() -> Self {
        Self {
            depreciation: 2.5,
            interest_rate: 5.0,
            water_cost: 1.5,
            slurry_spreading_cost: 2.0,
            water_storage_cost: 85.0,
            divert_water_cost: 35.0,
            roofing_cost: 60.0,
            slurry_store_cost: 75.0,
        }
    }
}

/// Baseline farm data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmDetails {
    pub name: String,
    pub farmable_area_ha: f64,
    /// 10-figure grid reference of the slurry store, e.g. "SJ 12345 67890".
    pub grid_reference: String,
    /// 4-figure reference derived from `grid_reference`; keys rainfall rows.
    pub grid_reference_4fig: String,
    /// Maximum likely 2-day rainfall (mm). When absent or non-positive the
    /// figure is derived from the rainfall table instead.
    pub max_rainfall_override: Option<f64>,
    pub cattle_in_herd: u32,
    pub cows_in_milk: u32,
    pub milk_yield: f64,
    pub financial: FinancialRates,
}

impl FarmDetails {
    /// Fills in the 4-figure reference from the 10-figure one when it has
    /// not been supplied directly.
    pub fn derive_grid_reference(&mut self) {
        if self.grid_reference_4fig.is_empty() {
            self.grid_reference_4fig = rainfall::derive_four_figure(&self.grid_reference)
                .unwrap_or_default();
        }
    }
}

/// One slurry store. Each kind carries the geometry relevant to it plus a
/// directly-entered volume that, when positive, overrides the geometric
/// computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageStore {
    EarthBank {
        #[serde(default = "default_bank_slope")]
        bank_slope: String,
        #[serde(default)]
        length_m: f64,
        #[serde(default)]
        width_m: f64,
        #[serde(default)]
        depth_m: f64,
        #[serde(default)]
        volume_m3: f64,
    },
    Tower {
        #[serde(default)]
        length_m: f64,
        #[serde(default)]
        width_m: f64,
        #[serde(default)]
        depth_m: f64,
        #[serde(default)]
        diameter_m: f64,
        #[serde(default)]
        volume_m3: f64,
    },
    Bag {
        #[serde(default)]
        volume_m3: f64,
    },
}

fn default_bank_slope() -> String {
    reference::DEFAULT_BANK_SLOPE.to_string()
}

/// One livestock line. The per-head rates are resolved from the reference
/// table when the classification is set and cached here; either may be
/// hand-overridden afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LivestockEntry {
    pub species: String,
    pub age: String,
    pub yield_band: Option<String>,
    pub head_count: u32,
    /// Share of excreta captured as slurry, 0-100.
    pub slurry_percent: f64,
    /// Litres per head per day.
    pub daily_excreta_l: f64,
    /// Kilograms of nitrogen per head per year.
    pub annual_nitrogen_kg: f64,
}

impl Default for LivestockEntry {
    fn default() -> Self {
        Self {
            species: String::new(),
            age: String::new(),
            yield_band: None,
            head_count: 0,
            slurry_percent: 100.0,
            daily_excreta_l: 0.0,
            annual_nitrogen_kg: 0.0,
        }
    }
}

impl LivestockEntry {
    /// Builds an entry for a classification, resolving and caching its
    /// per-head rates. Unknown classifications get zero rates.
    pub fn classified(
        species: &str,
        age: &str,
        yield_band: Option<&str>,
        head_count: u32,
        slurry_percent: f64,
    ) -> Self {
        let mut entry = Self {
            species: species.to_string(),
            age: age.to_string(),
            yield_band: yield_band.map(str::to_string),
            head_count,
            slurry_percent,
            ..Self::default()
        };
        entry.resolve_rates();
        entry
    }

    /// Re-resolves the cached per-head rates from the reference table.
    /// Leaves the cached values untouched when the classification is not
    /// in the table, so hand-entered overrides survive.
    pub fn resolve_rates(&mut self) {
        match reference::livestock_rates(&self.species, &self.age, self.yield_band.as_deref()) {
            Some(rates) => {
                self.daily_excreta_l = rates.daily_excreta_l;
                self.annual_nitrogen_kg = rates.annual_nitrogen_kg;
            }
            None => {
                tracing::warn!(
                    "No reference rates for livestock '{} / {}', keeping cached values",
                    self.species,
                    self.age
                );
            }
        }
    }
}

/// What kind of surface drains into the slurry system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatchmentKind {
    Yard,
    Roof,
}

/// A yard or roof area draining to the store. Contributes rainwater only,
/// never excreta or nitrogen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catchment {
    pub kind: CatchmentKind,
    #[serde(default)]
    pub area_m2: f64,
    #[serde(default)]
    pub description: String,
}

/// Per-category pig washwater rates (litres per place per day). Carried
/// in full from the data-entry model; the preset calculation path does
/// not consume them yet (see `core::rainwater`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PigWashRates {
    pub sow_inc_litters: f64,
    pub dry_sow: f64,
    pub weaner_7_to_13kg: f64,
    pub weaner_13_to_31kg: f64,
    pub grower_dry_fed: f64,
    pub grower_liquid_fed: f64,
    pub finisher_dry_fed: f64,
    pub finisher_liquid_fed: f64,
    pub maiden_gilt: f64,
    pub boar_66_to_150kg: f64,
    pub boar_over_150kg: f64,
}

impl Default for PigWashRates {
    fn default() -> Self {
        Self {
            sow_inc_litters: 7.0,
            dry_sow: 7.0,
            weaner_7_to_13kg: 7.0,
            weaner_13_to_31kg: 7.0,
            grower_dry_fed: 7.0,
            grower_liquid_fed: 7.0,
            finisher_dry_fed: 7.0,
            finisher_liquid_fed: 7.0,
            maiden_gilt: 7.0,
            boar_66_to_150kg: 7.0,
            boar_over_150kg: 7.0,
        }
    }
}

/// Parlour and pig washwater configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WashingsConfig {
    pub include_parlour: bool,
    /// Litres per cow per day sent to the store from parlour washing.
    pub parlour_litres_per_cow: f64,
    pub include_pig_wash: bool,
    /// Use the preset NVZ rates rather than a hand-entered total.
    pub use_preset_pig_rates: bool,
    pub pig_rates: PigWashRates,
    /// Hand-entered total washwater (litres/day) when presets are off.
    pub pig_wash_total_l: f64,
}

impl Default for WashingsConfig {
    fn default() -> Self {
        Self {
            include_parlour: false,
            parlour_litres_per_cow: 20.0,
            include_pig_wash: false,
            use_preset_pig_rates: true,
            pig_rates: PigWashRates::default(),
            pig_wash_total_l: 0.0,
        }
    }
}

/// Slurry separator settings applied to livestock production.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorConfig {
    pub in_use: bool,
    /// Average % reduction in slurry volume achieved by the separator.
    pub reduction_percent: f64,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            in_use: false,
            reduction_percent: 30.0,
        }
    }
}

/// The complete validated input snapshot handed to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmSnapshot {
    pub farm: FarmDetails,
    pub stores: Vec<StorageStore>,
    pub livestock: Vec<LivestockEntry>,
    pub catchments: Vec<Catchment>,
    pub washings: WashingsConfig,
    pub separator: SeparatorConfig,
}

impl FarmSnapshot {
    pub fn total_yard_area(&self) -> f64 {
        self.catchment_area(CatchmentKind::Yard)
    }

    pub fn total_roof_area(&self) -> f64 {
        self.catchment_area(CatchmentKind::Roof)
    }

    fn catchment_area(&self, kind: CatchmentKind) -> f64 {
        self.catchments
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.area_m2.max(0.0))
            .sum()
    }
}

/// Storage volume subtotals by store kind (m³).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StorageVolumes {
    pub earth_bank_m3: f64,
    pub tower_m3: f64,
    pub bag_m3: f64,
    pub total_m3: f64,
}

/// Aggregate excreta and nitrogen output of the livestock list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExcretaTotals {
    /// Litres of slurry-captured excreta per day across the herd.
    pub daily_excreta_l: f64,
    /// Annual slurry volume in m³ derived from the daily figure.
    pub annual_slurry_m3: f64,
    /// Total nitrogen excreted per year (kg), independent of slurry capture.
    pub nitrogen_kg: f64,
}

/// Rainwater entering the system from yards and roofs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RainwaterTotals {
    pub yard_area_m2: f64,
    pub roof_area_m2: f64,
    /// Resolved maximum likely 2-day rainfall (mm).
    pub max_rainfall_mm: f64,
    pub yard_rainwater_m3: f64,
    pub roof_rainwater_m3: f64,
    pub collected_m3: f64,
}

/// Annual washwater volumes reaching the store (m³/yr).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WashingsTotals {
    pub parlour_m3: f64,
    pub pig_m3: f64,
}

/// Health of the store in a simulated month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthStatus {
    Ok,
    LowCapacity,
    Overflow,
}

/// The 12-month storage-year simulation output.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBreakdown {
    /// Slurry entering the store each month (m³), September first.
    pub production_m3: [f64; 12],
    /// Remaining capacity at each month end (m³); may go negative.
    pub remaining_m3: [f64; 12],
    pub status: [MonthStatus; 12],
    /// Count of months with remaining capacity still positive, 0-12.
    pub storage_months: u32,
}

/// Severity attached to a recommendation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Success,
    Advice,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

/// Regulatory outputs derived from the simulation.
#[derive(Debug, Clone, Serialize)]
pub struct Compliance {
    /// kg of nitrogen per farmable hectare, zero when no area is entered.
    pub nitrogen_loading_kg_ha: f64,
    /// Recommended reception pit size (m³).
    pub reception_pit_m3: f64,
    pub status: String,
    pub recommendations: Vec<Recommendation>,
}

/// The full derived snapshot returned by one engine run.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub storage: StorageVolumes,
    pub excreta: ExcretaTotals,
    pub rainwater: RainwaterTotals,
    pub washings: WashingsTotals,
    pub monthly: MonthlyBreakdown,
    pub compliance: Compliance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_entry_caches_reference_rates() {
        let entry = LivestockEntry::classified(
            "Dairy Cow",
            "After first calf",
            Some("Medium (6000-9000)"),
            100,
            100.0,
        );
        assert_eq!(entry.daily_excreta_l, 53.0);
        assert_eq!(entry.annual_nitrogen_kg, 101.0);
    }

    #[test]
    fn unknown_classification_keeps_override() {
        let mut entry = LivestockEntry {
            species: "Llama".to_string(),
            age: "Adult".to_string(),
            daily_excreta_l: 12.0,
            annual_nitrogen_kg: 30.0,
            ..LivestockEntry::default()
        };
        entry.resolve_rates();
        assert_eq!(entry.daily_excreta_l, 12.0);
        assert_eq!(entry.annual_nitrogen_kg, 30.0);
    }

    #[test]
    fn snapshot_splits_catchment_areas_by_kind() {
        let snapshot = FarmSnapshot {
            catchments: vec![
                Catchment {
                    kind: CatchmentKind::Yard,
                    area_m2: 120.0,
                    description: "collecting yard".to_string(),
                },
                Catchment {
                    kind: CatchmentKind::Roof,
                    area_m2: 300.0,
                    description: String::new(),
                },
                Catchment {
                    kind: CatchmentKind::Yard,
                    area_m2: -50.0,
                    description: "ignored negative".to_string(),
                },
            ],
            ..FarmSnapshot::default()
        };
        assert_eq!(snapshot.total_yard_area(), 120.0);
        assert_eq!(snapshot.total_roof_area(), 300.0);
    }

    #[test]
    fn farm_details_derive_four_figure_reference() {
        let mut farm = FarmDetails {
            grid_reference: "SJ 12345 67890".to_string(),
            ..FarmDetails::default()
        };
        farm.derive_grid_reference();
        assert_eq!(farm.grid_reference_4fig, "SJ1267");

        // An explicitly supplied 4-figure reference is kept.
        farm.grid_reference_4fig = "SO8040".to_string();
        farm.derive_grid_reference();
        assert_eq!(farm.grid_reference_4fig, "SO8040");
    }
}
