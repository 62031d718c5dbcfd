use serde_json::{json, Value};
use tabled::{settings::Style, Table, Tabled};

use crate::data::PeakRange;

#[derive(Tabled)]
struct PeakRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Center")]
    center: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Prominence")]
    prominence: String,
}

pub fn print_report(peaks: &[PeakRange], source_name: &str) {
    println!("\n=== Spectral Peak Recon: {source_name} ===\n");

    let rows: Vec<PeakRow> = peaks
        .iter()
        .map(|peak| PeakRow {
            kind: peak.kind.as_str(),
            center: format!("{:.2}", peak.center),
            range: format!("{:.2} to {:.2}", peak.left, peak.right),
            width: format!("{:.2}", peak.width()),
            prominence: format!("{:.4}", peak.prominence),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}\n");
}

/// Serialize a peak list for an AI prompt: rounded `{kind, center, range}`
/// records behind a fixed preamble flagging the x unit as advisory.
pub fn format_peaks_for_prompt(peaks: &[PeakRange], x_unit: &str, round_to: i32) -> String {
    let payload: Vec<Value> = peaks
        .iter()
        .map(|peak| {
            json!({
                "kind": peak.kind.as_str(),
                "center": round_to_places(peak.center, round_to),
                "range": [
                    round_to_places(peak.left, round_to),
                    round_to_places(peak.right, round_to),
                ],
            })
        })
        .collect();

    format!(
        "The strongest peaks extracted from the raw data follow, with approximate \
half-maximum ranges. The x unit is typically {x_unit}; treat the plotted axis as \
authoritative.\n{}",
        Value::Array(payload)
    )
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
