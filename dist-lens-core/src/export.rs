use crate::distribution::Distribution;
use crate::drag::ThresholdState;
use crate::loader::LoadReport;
use crate::scale::threshold_to_percentage;
use dist_lens_common::Result;
use std::io::Write;
use std::path::Path;

pub fn print_summary(dist: &Distribution, state: &ThresholdState) {
    println!("{:<16} {}", "Values:", dist.len());
    println!("{:<16} {}", "Min:", dist.min);
    println!("{:<16} {}", "Max:", dist.max);
    println!("{:<16} {}", "Mode:", state.mode.as_str());
    println!("{:<16} {}", "Threshold:", state.value);
    let pct = if dist.is_empty() {
        0.0
    } else {
        state.count as f64 / dist.len() as f64 * 100.0
    };
    println!("{:<16} {} ({:.1}%)", "Matching:", state.count, pct);
}

pub fn export_json(
    output_path: &Path,
    dist: &Distribution,
    state: &ThresholdState,
    log_scale: bool,
    ticks: &[f64],
    reports: &[LoadReport],
) -> Result<()> {
    let doc = serde_json::json!({
        "value_count": dist.len(),
        "min": dist.min,
        "max": dist.max,
        "log_scale": log_scale,
        "points": dist.points,
        "ticks": ticks,
        "threshold": state,
        "threshold_pct": threshold_to_percentage(dist.min, dist.max, state.value, log_scale),
        "load_reports": reports,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| dist_lens_common::DistLensError::Other(e.to_string()))?;
    Ok(())
}

pub fn export_csv(output_path: &Path, dist: &Distribution) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "value,cumulative_count")?;
    for p in &dist.points {
        writeln!(file, "{},{}", p.value, p.cumulative_count)?;
    }
    Ok(())
}
