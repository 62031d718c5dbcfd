use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// Whether a detected feature is a peak (local maximum of y) or a trough
/// (local maximum of -y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeakKind {
    Max,
    Min,
}

impl PeakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeakKind::Max => "max",
            PeakKind::Min => "min",
        }
    }
}

/// Polarity selection for the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeakMode {
    /// Run both polarities and keep whichever set has higher total prominence.
    Auto,
    /// Treat peaks as local maxima of y.
    Max,
    /// Treat peaks as local minima of y (absorption troughs).
    Min,
}

impl fmt::Display for PeakMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PeakMode::Auto => "auto",
            PeakMode::Max => "max",
            PeakMode::Min => "min",
        })
    }
}

/// One extracted peak with its approximate half-prominence range.
///
/// `left <= right` always holds; `center` is the x-coordinate of the extremum
/// sample itself and may fall outside `[left, right]` when noise skews the
/// interpolated crossings. `prominence` is measured on the smoothed signal and
/// is only meaningful for ranking.
#[derive(Debug, Clone, Serialize)]
pub struct PeakRange {
    pub kind: PeakKind,
    pub left: f64,
    pub center: f64,
    pub right: f64,
    pub prominence: f64,
}

impl PeakRange {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Per-call extraction parameters.
#[derive(Debug, Clone, Copy)]
pub struct PeakParams {
    /// Maximum number of peaks to return; 0 yields an empty result.
    pub top_n: usize,
    pub mode: PeakMode,
    /// Moving-average window; rounded up to odd, 1 disables smoothing.
    pub smooth_window: usize,
    /// Fraction of the smoothed signal's global range used as the
    /// minimum-prominence filter.
    pub min_prominence_ratio: f64,
}

impl Default for PeakParams {
    fn default() -> Self {
        Self {
            top_n: 5,
            mode: PeakMode::Auto,
            smooth_window: 7,
            min_prominence_ratio: 0.01,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("min_prominence_ratio must be a finite value within [0, 1], got {0}")]
    ProminenceRatio(f64),
}

impl PeakParams {
    /// Fail fast on caller-contract violations; signal-quality problems are
    /// data conditions and degrade to an empty result instead.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.min_prominence_ratio.is_finite()
            || !(0.0..=1.0).contains(&self.min_prominence_ratio)
        {
            return Err(ParamError::ProminenceRatio(self.min_prominence_ratio));
        }
        Ok(())
    }
}

/// Two-column spectral trace as read from file.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub source_name: String,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_library_defaults() {
        let params = PeakParams::default();
        assert_eq!(params.top_n, 5);
        assert_eq!(params.mode, PeakMode::Auto);
        assert_eq!(params.smooth_window, 7);
        assert!((params.min_prominence_ratio - 0.01).abs() < 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn out_of_range_prominence_ratio_is_rejected() {
        let mut params = PeakParams::default();
        params.min_prominence_ratio = -0.5;
        assert!(params.validate().is_err());
        params.min_prominence_ratio = 1.5;
        assert!(params.validate().is_err());
        params.min_prominence_ratio = f64::NAN;
        assert!(params.validate().is_err());
        params.min_prominence_ratio = 1.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn kind_labels_are_lowercase() {
        assert_eq!(PeakKind::Max.as_str(), "max");
        assert_eq!(PeakKind::Min.as_str(), "min");
    }
}
