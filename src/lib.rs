//! Peak extraction for two-column spectral traces (FTIR, XRD, and similar):
//! moving-average smoothing, prominence-ranked local extrema, and
//! half-prominence width estimation, with automatic peak/trough polarity
//! selection.
//!
//! The engine is a pure function of its inputs: it never mutates caller
//! buffers and keeps no state between calls, so independent extractions can
//! run concurrently without coordination.

pub mod analysis;
pub mod config;
pub mod data;
pub mod loader;
pub mod output;

pub use analysis::extract_top_peaks;
pub use data::{ParamError, PeakKind, PeakMode, PeakParams, PeakRange, Trace};
