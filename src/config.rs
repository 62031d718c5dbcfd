use clap::Parser;

use crate::data::PeakMode;

/// Command-line configuration for the spectral peak extraction tool.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Input file with two numeric columns (x, y), e.g. an FTIR or XRD export.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: String,

    /// Maximum number of peaks to report.
    #[arg(long, default_value_t = 5)]
    pub top_n: usize,

    /// Peak polarity: max, min, or auto (pick the more significant set).
    #[arg(long, value_enum, default_value_t = PeakMode::Auto)]
    pub mode: PeakMode,

    /// Moving-average smoothing window (rounded up to odd; 1 disables).
    #[arg(long, default_value_t = 7)]
    pub smooth_window: usize,

    /// Minimum prominence as a fraction of the smoothed signal's range.
    #[arg(long, default_value_t = 0.01)]
    pub min_prominence_ratio: f64,

    /// Decimal places used when rounding peak coordinates for the prompt.
    #[arg(long, default_value_t = 0)]
    pub round_to: i32,

    /// X-axis unit label quoted in the prompt preamble.
    #[arg(long, default_value = "cm-1")]
    pub x_unit: String,
}
