use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use spectral_peaks::analysis::extract_top_peaks;
use spectral_peaks::config::AppConfig;
use spectral_peaks::data::PeakParams;
use spectral_peaks::loader::{load_trace, validate_trace};
use spectral_peaks::output::{format_peaks_for_prompt, print_report};

fn main() -> Result<()> {
    let config = AppConfig::parse();
    run(&config)
}

fn run(config: &AppConfig) -> Result<()> {
    let input_path = &config.input_path;
    if !Path::new(input_path).exists() {
        bail!("input file {:?} does not exist", input_path);
    }

    let trace = load_trace(input_path)
        .with_context(|| format!("failed to load trace data from {:?}", input_path))?;
    validate_trace(&trace)?;

    println!(
        "Loaded {} samples from {} spanning x = {:.4} to {:.4}",
        trace.len(),
        trace.source_name,
        trace.x.first().copied().unwrap_or(f64::NAN),
        trace.x.last().copied().unwrap_or(f64::NAN),
    );

    let params = PeakParams {
        top_n: config.top_n,
        mode: config.mode,
        smooth_window: config.smooth_window,
        min_prominence_ratio: config.min_prominence_ratio,
    };
    let peaks = extract_top_peaks(&trace.x, &trace.y, &params)?;

    // An empty extraction is a valid outcome, not a failure.
    if peaks.is_empty() {
        println!("No significant peaks detected.");
        return Ok(());
    }

    println!(
        "Detected {} significant {}",
        peaks.len(),
        if peaks.len() == 1 { "peak" } else { "peaks" },
    );
    print_report(&peaks, &trace.source_name);
    println!("{}", format_peaks_for_prompt(&peaks, &config.x_unit, config.round_to));

    Ok(())
}
