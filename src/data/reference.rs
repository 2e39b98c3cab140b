//! Standard livestock excreta and nitrogen figures, and earth-bank
//! slope factors, as published in the storage guidance tables.

/// Excreta and nitrogen output for one head of a livestock category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcretaRates {
    /// Litres of excreta per head per day.
    pub daily_excreta_l: f64,
    /// Kilograms of nitrogen excreted per head per year.
    pub annual_nitrogen_kg: f64,
}

struct RateRow {
    species: &'static str,
    age: &'static str,
    yield_band: Option<&'static str>,
    rates: ExcretaRates,
}

const fn row(
    species: &'static str,
    age: &'static str,
    yield_band: Option<&'static str>,
    daily_excreta_l: f64,
    annual_nitrogen_kg: f64,
) -> RateRow {
    RateRow {
        species,
        age,
        yield_band,
        rates: ExcretaRates {
            daily_excreta_l,
            annual_nitrogen_kg,
        },
    }
}

const LIVESTOCK_RATES: &[RateRow] = &[
    row("Dairy Cow", "After first calf", Some("Low (<6000)"), 41.0, 83.0),
    row("Dairy Cow", "After first calf", Some("Medium (6000-9000)"), 53.0, 101.0),
    row("Dairy Cow", "After first calf", Some("High (>9000)"), 66.0, 117.0),
    row("Dairy Followers", "< 3 months", None, 5.0, 21.0),
    row("Dairy Followers", "3-13 months", None, 9.0, 38.0),
    row("Dairy Followers", "13-25 months", None, 13.0, 59.0),
    row("Beef Suckler", "After first calf", Some("Small (450kg)"), 25.0, 79.0),
    row("Beef Suckler", "After first calf", Some("Medium (550kg)"), 28.0, 93.0),
    row("Beef Suckler", "After first calf", Some("Large (650kg)"), 36.0, 111.0),
    row("Beef Cattle", "< 3 months", None, 5.0, 11.0),
    row("Beef Cattle", "3-13 months", None, 9.0, 32.0),
    row("Beef Cattle", "13-25 months", None, 13.0, 59.0),
    row("Beef Cattle", "Intensive beef (>500kg)", None, 28.0, 84.0),
    row("Sheep", "Lamb < 6 months", None, 0.4, 1.0),
    row("Sheep", "Lamb 6-12 months", None, 0.8, 2.0),
    row("Sheep", "Ewe & lamb(s)", None, 3.0, 8.0),
    row("Sheep", "Ram", None, 3.0, 8.0),
    row("Pigs", "Sow & litter (to 7kg)", None, 10.0, 19.0),
    row("Pigs", "Dry sow (in-pig)", None, 5.0, 11.0),
    row("Pigs", "Weaner (7-13kg)", None, 1.0, 3.0),
    row("Pigs", "Weaner (13-31kg)", None, 2.0, 4.0),
    row("Pigs", "Grower (31-66kg)", None, 3.0, 8.0),
    row("Pigs", "Finisher (66-100kg)", None, 4.0, 10.0),
    row("Pigs", "Maiden gilts (66-100kg)", None, 4.0, 10.0),
    row("Pigs", "Boar (66-150kg)", None, 4.0, 10.0),
    row("Pigs", "Boar (>150kg)", None, 5.0, 11.0),
    row("Poultry", "Broiler (< 2.4kg)", None, 0.08, 0.3),
    row("Poultry", "Layer (< 2.4kg)", None, 0.12, 0.5),
    row("Poultry", "Turkey (≤ 14kg)", None, 0.16, 0.6),
    row("Poultry", "Duck (≤ 7kg)", None, 0.15, 0.6),
];

/// Looks up the standard rates for a livestock classification.
///
/// Species and age must match a published category. The yield band only
/// applies to categories that carry one (dairy cows, beef sucklers); when
/// it is missing or unrecognised the first band listed for the category
/// is used, matching how the reference table is read in practice.
pub fn livestock_rates(species: &str, age: &str, yield_band: Option<&str>) -> Option<ExcretaRates> {
    let mut group = LIVESTOCK_RATES
        .iter()
        .filter(|r| r.species == species && r.age == age)
        .peekable();

    let first = group.peek().map(|r| r.rates)?;

    if let Some(band) = yield_band {
        if let Some(matched) = group.find(|r| r.yield_band == Some(band)) {
            return Some(matched.rates);
        }
    }

    Some(first)
}

/// All distinct species names in the reference table, in table order.
pub fn species_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for r in LIVESTOCK_RATES {
        if !names.contains(&r.species) {
            names.push(r.species);
        }
    }
    names
}

/// The bank slope assumed when a store does not specify one (1:2.5).
pub const DEFAULT_BANK_SLOPE: &str = "Bank slope of 1:2.5 (21.8 degrees)";

/// Slope factor applied when the selector is unrecognised.
pub const DEFAULT_BANK_SLOPE_FACTOR: f64 = 5.0;

/// Resolves a bank-slope selector to its dimensionless geometry factor.
pub fn bank_slope_factor(selector: &str) -> f64 {
    match selector {
        "Bank slope of 1:0.5 (63 degrees)" => 1.0,
        "Bank slope of 1:1 (45 degrees)" => 2.0,
        "Bank slope of 1:1.5 (33.7 degrees)" => 3.0,
        "Bank slope of 1:2 (26.6 degrees)" => 4.0,
        "Bank slope of 1:2.5 (21.8 degrees)" => 5.0,
        "Bank slope of 1:3 (18.4 degrees)" => 6.0,
        _ => DEFAULT_BANK_SLOPE_FACTOR,
    }
}
