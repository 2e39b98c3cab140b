//! Nitrogen loading, reception pit sizing and the recommendation ladder.

use crate::domain::model::{
    Compliance, ExcretaTotals, MonthlyBreakdown, RainwaterTotals, Recommendation, Severity,
};

/// NVZ nitrogen loading limit (kg/ha).
pub const NVZ_NITROGEN_LIMIT_KG_HA: f64 = 170.0;

/// Months of storage below which capacity is insufficient outright.
pub const INSUFFICIENT_STORAGE_MONTHS: u32 = 4;

/// Months of storage required by the guidance.
pub const REQUIRED_STORAGE_MONTHS: u32 = 6;

const STATUS_COMPLIANT: &str = "You comply with the guidance for minimum storage of 6 months.";
const STATUS_NON_COMPLIANT: &str = "You do not have at least 6 months storage. Consider whether \
     you can comply with FRfW requirements and increase storage capacity if not.";

/// Derives the regulatory outputs from the simulation results.
///
/// The storage and nitrogen axes are assessed independently: a farm can
/// exceed the NVZ nitrogen limit while still reporting storage
/// compliance, and vice versa.
pub fn evaluate(
    farmable_area_ha: f64,
    excreta: &ExcretaTotals,
    rainwater: &RainwaterTotals,
    monthly: &MonthlyBreakdown,
) -> Compliance {
    let nitrogen_loading_kg_ha = nitrogen_loading(excreta.nitrogen_kg, farmable_area_ha);
    let reception_pit_m3 = reception_pit_size(excreta.daily_excreta_l, rainwater);

    let status = if monthly.storage_months >= REQUIRED_STORAGE_MONTHS {
        STATUS_COMPLIANT.to_string()
    } else {
        STATUS_NON_COMPLIANT.to_string()
    };

    Compliance {
        nitrogen_loading_kg_ha,
        reception_pit_m3,
        status,
        recommendations: recommendations(
            monthly.storage_months,
            nitrogen_loading_kg_ha,
            rainwater.collected_m3,
        ),
    }
}

/// kg of nitrogen per farmable hectare. A farm with no entered area
/// reads as zero rather than failing the whole report.
pub fn nitrogen_loading(nitrogen_kg: f64, farmable_area_ha: f64) -> f64 {
    if farmable_area_ha <= 0.0 {
        tracing::warn!("Farmable area not set; nitrogen loading reported as zero");
        return 0.0;
    }
    nitrogen_kg / farmable_area_ha
}

/// Reception pit sized for two days of production plus two days' worth
/// of rainfall runoff from yards and roofs.
pub fn reception_pit_size(daily_excreta_l: f64, rainwater: &RainwaterTotals) -> f64 {
    let daily_m3 = daily_excreta_l / 1000.0;
    daily_m3 * 2.0
        + rainwater.yard_area_m2 * (rainwater.max_rainfall_mm / 1000.0)
        + rainwater.roof_area_m2 * (rainwater.max_rainfall_mm / 1000.0)
}

/// Fixed rule ladder, evaluated in order; rules are independent rather
/// than mutually exclusive, so several can fire at once.
fn recommendations(
    storage_months: u32,
    nitrogen_loading_kg_ha: f64,
    rainwater_collected_m3: f64,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let mut push = |severity, message: &str| {
        recs.push(Recommendation {
            severity,
            message: message.to_string(),
        });
    };

    if storage_months < INSUFFICIENT_STORAGE_MONTHS {
        push(
            Severity::Error,
            "Insufficient storage capacity. Consider expanding your slurry stores.",
        );
    } else if storage_months < REQUIRED_STORAGE_MONTHS {
        push(
            Severity::Warning,
            "Storage capacity is marginal. Additional capacity would be beneficial.",
        );
    } else {
        push(Severity::Success, STATUS_COMPLIANT);
    }

    if nitrogen_loading_kg_ha > NVZ_NITROGEN_LIMIT_KG_HA {
        push(
            Severity::Error,
            "Nitrogen loading exceeds the recommended 170 kg/ha limit for NVZs.",
        );
    }

    if storage_months < REQUIRED_STORAGE_MONTHS && rainwater_collected_m3 > 0.0 {
        push(
            Severity::Advice,
            "Consider collecting roof water and/or diverting to a clean drain.",
        );
    }

    if storage_months < REQUIRED_STORAGE_MONTHS {
        push(
            Severity::Advice,
            "Consider covering slurry storage with an impermeable cover.",
        );
    }

    recs
}
