//! Report rendering for the presentation boundary.

use chrono::Local;
use std::fmt::Write as _;

use crate::core::monthly::{DAYS_IN_MONTH, MONTHS};
use crate::domain::model::{CalculationResult, FarmSnapshot, MonthStatus, Severity};
use crate::utils::error::Result;

/// Renders the result as a plain-text report: headline metrics,
/// compliance status and recommendations, then the monthly table.
pub fn render_text(snapshot: &FarmSnapshot, result: &CalculationResult) -> String {
    let mut out = String::new();
    let farm_name = if snapshot.farm.name.is_empty() {
        "(unnamed farm)"
    } else {
        &snapshot.farm.name
    };

    let _ = writeln!(out, "=== Slurry Report: {} ===", farm_name);
    let _ = writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Farm nitrogen loading:   {:.1} kg/ha (before manure import/export)",
        result.compliance.nitrogen_loading_kg_ha
    );
    let _ = writeln!(
        out,
        "Storage capacity:        {} months (minimum recommended: 6)",
        result.monthly.storage_months
    );
    let _ = writeln!(
        out,
        "Reception pit size:      {:.1} m³",
        result.compliance.reception_pit_m3
    );
    let _ = writeln!(
        out,
        "Total annual slurry:     {:.1} m³ ({} of capacity)",
        result.excreta.annual_slurry_m3,
        utilisation_label(result)
    );
    let _ = writeln!(
        out,
        "Total storage capacity:  {:.1} m³ (earth bank {:.1}, tower {:.1}, bag {:.1})",
        result.storage.total_m3,
        result.storage.earth_bank_m3,
        result.storage.tower_m3,
        result.storage.bag_m3
    );
    let _ = writeln!(
        out,
        "Max 2-day rainfall:      {:.0} mm, collecting {:.1} m³ from {:.0} m² of yards and {:.0} m² of roofs",
        result.rainwater.max_rainfall_mm,
        result.rainwater.collected_m3,
        result.rainwater.yard_area_m2,
        result.rainwater.roof_area_m2
    );
    if result.washings.parlour_m3 > 0.0 || result.washings.pig_m3 > 0.0 {
        let _ = writeln!(
            out,
            "Washings:                parlour {:.1} m³/yr, pig {:.1} m³/yr",
            result.washings.parlour_m3, result.washings.pig_m3
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", result.compliance.status);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for rec in &result.compliance.recommendations {
        let _ = writeln!(out, "  [{}] {}", severity_label(rec.severity), rec.message);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Slurry volume by month:");
    let _ = writeln!(out, "  Month  Days  Production (m³)  Remaining (m³)  Status");
    for i in 0..12 {
        let _ = writeln!(
            out,
            "  {:<5}  {:>4}  {:>15.1}  {:>14.1}  {}",
            MONTHS[i],
            DAYS_IN_MONTH[i],
            result.monthly.production_m3[i],
            result.monthly.remaining_m3[i],
            status_label(result.monthly.status[i])
        );
    }

    out
}

/// Renders the result as pretty-printed JSON.
pub fn render_json(result: &CalculationResult) -> Result<String> {
    let json = serde_json::to_string_pretty(result)?;
    Ok(json)
}

fn utilisation_label(result: &CalculationResult) -> String {
    if result.storage.total_m3 > 0.0 {
        let percent = result.excreta.annual_slurry_m3 / result.storage.total_m3 * 100.0;
        format!("{:.0}%", percent)
    } else {
        "n/a".to_string()
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Success => "ok",
        Severity::Advice => "advice",
    }
}

fn status_label(status: MonthStatus) -> &'static str {
    match status {
        MonthStatus::Ok => "OK",
        MonthStatus::LowCapacity => "Low capacity",
        MonthStatus::Overflow => "Overflow",
    }
}
