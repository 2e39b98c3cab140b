//! TOML farm-snapshot file.
//!
//! The file mirrors the data-entry form: a `[farm]` table, repeated
//! `[[stores]]`, `[[livestock]]`, `[[yards]]` and `[[roofs]]` entries,
//! and optional `[washings]` / `[separator]` tables. Almost everything
//! is optional; the loader substitutes documented defaults and zeroes
//! so a partially-filled file still produces a complete report.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::{
    Catchment, CatchmentKind, FarmDetails, FarmSnapshot, LivestockEntry, SeparatorConfig,
    StorageStore, WashingsConfig,
};
use crate::utils::error::Result;
use crate::utils::validation::{clamp_percent, non_negative};

/// One livestock line as written in the file. Rates omitted here are
/// resolved from the reference table at load time; explicit values act
/// as hand overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LivestockRecord {
    pub species: String,
    pub age: String,
    pub yield_band: Option<String>,
    pub head_count: u32,
    pub slurry_percent: Option<f64>,
    pub daily_excreta_l: Option<f64>,
    pub annual_nitrogen_kg: Option<f64>,
}

/// A yard or roof area line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceRecord {
    pub area_m2: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmFile {
    pub farm: FarmDetails,
    pub stores: Vec<StorageStore>,
    pub livestock: Vec<LivestockRecord>,
    pub yards: Vec<SurfaceRecord>,
    pub roofs: Vec<SurfaceRecord>,
    pub washings: WashingsConfig,
    pub separator: SeparatorConfig,
}

impl FarmFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let file: FarmFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Turns the file into a validated snapshot: derives the 4-figure
    /// grid reference, resolves livestock rates, and sanitises numeric
    /// fields (negatives collapse to zero, percentages clamp to 0-100).
    pub fn into_snapshot(self) -> FarmSnapshot {
        let mut farm = self.farm;
        farm.farmable_area_ha = non_negative(farm.farmable_area_ha);
        farm.derive_grid_reference();

        let livestock = self.livestock.into_iter().map(resolve_livestock).collect();

        let mut catchments: Vec<Catchment> = Vec::new();
        catchments.extend(surface_catchments(self.yards, CatchmentKind::Yard));
        catchments.extend(surface_catchments(self.roofs, CatchmentKind::Roof));

        let mut washings = self.washings;
        washings.parlour_litres_per_cow = non_negative(washings.parlour_litres_per_cow);
        washings.pig_wash_total_l = non_negative(washings.pig_wash_total_l);

        let mut separator = self.separator;
        separator.reduction_percent = clamp_percent(separator.reduction_percent);

        FarmSnapshot {
            farm,
            stores: self.stores,
            livestock,
            catchments,
            washings,
            separator,
        }
    }
}

fn resolve_livestock(record: LivestockRecord) -> LivestockEntry {
    let mut entry = LivestockEntry::classified(
        &record.species,
        &record.age,
        record.yield_band.as_deref(),
        record.head_count,
        clamp_percent(record.slurry_percent.unwrap_or(100.0)),
    );
    // Explicit file values override the reference rates.
    if let Some(daily) = record.daily_excreta_l {
        entry.daily_excreta_l = non_negative(daily);
    }
    if let Some(nitrogen) = record.annual_nitrogen_kg {
        entry.annual_nitrogen_kg = non_negative(nitrogen);
    }
    entry
}

fn surface_catchments(
    surfaces: Vec<SurfaceRecord>,
    kind: CatchmentKind,
) -> impl Iterator<Item = Catchment> {
    surfaces.into_iter().map(move |s| Catchment {
        kind,
        area_m2: non_negative(s.area_m2),
        description: s.description,
    })
}
