//! Storage volume calculation across heterogeneous store kinds.
//!
//! A directly-entered positive volume always wins over geometry. Missing
//! or invalid geometry yields zero for that store, never an error: the
//! source data comes from incrementally-filled forms.

use crate::data::reference;
use crate::domain::model::{StorageStore, StorageVolumes};

/// Sums storage volume per kind and in total. Every output is ≥ 0.
pub fn storage_volumes(stores: &[StorageStore]) -> StorageVolumes {
    let mut totals = StorageVolumes::default();

    for store in stores {
        let volume = store_volume(store);
        match store {
            StorageStore::EarthBank { .. } => totals.earth_bank_m3 += volume,
            StorageStore::Tower { .. } => totals.tower_m3 += volume,
            StorageStore::Bag { .. } => totals.bag_m3 += volume,
        }
    }

    totals.total_m3 = totals.earth_bank_m3 + totals.tower_m3 + totals.bag_m3;
    totals
}

/// Resolved volume of a single store (m³).
pub fn store_volume(store: &StorageStore) -> f64 {
    match *store {
        StorageStore::EarthBank {
            ref bank_slope,
            length_m,
            width_m,
            depth_m,
            volume_m3,
        } => {
            if volume_m3 > 0.0 {
                volume_m3
            } else if length_m > 0.0 && width_m > 0.0 && depth_m > 0.0 {
                let slope_factor = reference::bank_slope_factor(bank_slope);
                // Sloped banks eat into the usable depth along the length.
                ((depth_m - length_m * slope_factor) * length_m * width_m).max(0.0)
            } else {
                0.0
            }
        }
        StorageStore::Tower {
            length_m,
            width_m,
            depth_m,
            diameter_m,
            volume_m3,
        } => {
            if volume_m3 > 0.0 {
                volume_m3
            } else if diameter_m > 0.0 && depth_m > 0.0 {
                let radius = diameter_m / 2.0;
                std::f64::consts::PI * radius * radius * depth_m
            } else if length_m > 0.0 && width_m > 0.0 && depth_m > 0.0 {
                length_m * width_m * depth_m
            } else {
                0.0
            }
        }
        StorageStore::Bag { volume_m3 } => volume_m3.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tower(length: f64, width: f64, depth: f64, diameter: f64, volume: f64) -> StorageStore {
        StorageStore::Tower {
            length_m: length,
            width_m: width,
            depth_m: depth,
            diameter_m: diameter,
            volume_m3: volume,
        }
    }

    #[test]
    fn explicit_volume_overrides_geometry() {
        let store = tower(10.0, 10.0, 10.0, 8.0, 123.4);
        assert_eq!(store_volume(&store), 123.4);
    }

    #[test]
    fn circular_tower_volume() {
        let store = tower(0.0, 0.0, 3.0, 4.0, 0.0);
        assert_relative_eq!(store_volume(&store), 37.699, epsilon = 1e-3);
    }

    #[test]
    fn rectangular_tower_volume() {
        let store = tower(6.0, 4.0, 2.0, 0.0, 0.0);
        assert_eq!(store_volume(&store), 48.0);
    }

    #[test]
    fn incomplete_tower_geometry_is_zero() {
        assert_eq!(store_volume(&tower(6.0, 0.0, 2.0, 0.0, 0.0)), 0.0);
        assert_eq!(store_volume(&tower(0.0, 0.0, 0.0, 4.0, 0.0)), 0.0);
    }

    #[test]
    fn earth_bank_undersized_depth_clamps_to_zero() {
        let store = StorageStore::EarthBank {
            bank_slope: reference::DEFAULT_BANK_SLOPE.to_string(),
            length_m: 10.0,
            width_m: 5.0,
            depth_m: 3.0,
            volume_m3: 0.0,
        };
        // (3 - 10*5) is deeply negative; the clamp keeps the volume at 0.
        assert_eq!(store_volume(&store), 0.0);
    }

    #[test]
    fn earth_bank_with_positive_working_depth() {
        let store = StorageStore::EarthBank {
            bank_slope: "Bank slope of 1:0.5 (63 degrees)".to_string(),
            length_m: 2.0,
            width_m: 10.0,
            depth_m: 4.0,
            volume_m3: 0.0,
        };
        // (4 - 2*1) * 2 * 10 = 40
        assert_eq!(store_volume(&store), 40.0);
    }

    #[test]
    fn unknown_bank_slope_defaults_to_one_in_two_and_a_half() {
        let store = StorageStore::EarthBank {
            bank_slope: "unrecognised".to_string(),
            length_m: 0.5,
            width_m: 10.0,
            depth_m: 4.0,
            volume_m3: 0.0,
        };
        // (4 - 0.5*5) * 0.5 * 10 = 7.5
        assert_relative_eq!(store_volume(&store), 7.5, epsilon = 1e-9);
    }

    #[test]
    fn totals_split_by_kind() {
        let stores = vec![
            StorageStore::Bag { volume_m3: 50.0 },
            StorageStore::Bag { volume_m3: -10.0 },
            tower(6.0, 4.0, 2.0, 0.0, 0.0),
            StorageStore::EarthBank {
                bank_slope: reference::DEFAULT_BANK_SLOPE.to_string(),
                length_m: 0.0,
                width_m: 0.0,
                depth_m: 0.0,
                volume_m3: 200.0,
            },
        ];
        let totals = storage_volumes(&stores);
        assert_eq!(totals.bag_m3, 50.0);
        assert_eq!(totals.tower_m3, 48.0);
        assert_eq!(totals.earth_bank_m3, 200.0);
        assert_eq!(totals.total_m3, 298.0);
    }
}
