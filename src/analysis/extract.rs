use std::cmp::Ordering;

use crate::analysis::extrema::{
    local_maxima_indices, nearest_local_min_left, nearest_local_min_right,
};
use crate::analysis::smooth::moving_average;
use crate::analysis::width::half_prominence_range;
use crate::data::{ParamError, PeakKind, PeakMode, PeakParams, PeakRange};

/// Single-polarity pipeline: smooth, find maxima, filter by prominence
/// against the smoothed signal's global range, attach half-prominence
/// ranges, rank descending by prominence, keep the top N.
///
/// `signal` is y as-is for `kind = Max` and -y for `kind = Min`; x is shared
/// either way.
fn extract_from_signal(
    x: &[f64],
    signal: &[f64],
    kind: PeakKind,
    params: &PeakParams,
) -> Vec<PeakRange> {
    let smoothed = moving_average(signal, params.smooth_window);
    let peak_indices = local_maxima_indices(&smoothed);
    if peak_indices.is_empty() {
        return Vec::new();
    }

    let lowest = smoothed.iter().copied().fold(f64::INFINITY, f64::min);
    let highest = smoothed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let global_span = highest - lowest;
    let min_prominence = if global_span > 0.0 {
        global_span * params.min_prominence_ratio
    } else {
        0.0
    };

    let mut candidates: Vec<(f64, PeakRange)> = Vec::new();
    for peak_i in peak_indices {
        let left_min_i = nearest_local_min_left(&smoothed, peak_i);
        let right_min_i = nearest_local_min_right(&smoothed, peak_i);
        let baseline = smoothed[left_min_i].max(smoothed[right_min_i]);
        let prominence = smoothed[peak_i] - baseline;
        if prominence <= 0.0 || prominence < min_prominence {
            continue;
        }

        let (left_x, right_x) = half_prominence_range(
            x,
            &smoothed,
            peak_i,
            left_min_i,
            right_min_i,
            baseline,
            prominence,
        );
        candidates.push((
            prominence,
            PeakRange {
                kind,
                left: left_x.min(right_x),
                center: x[peak_i],
                right: left_x.max(right_x),
                prominence,
            },
        ));
    }

    // Stable sort: equal prominences stay in ascending sample order.
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    candidates.truncate(params.top_n);
    candidates.into_iter().map(|(_, peak)| peak).collect()
}

/// Extract the most significant peaks (or troughs) of a two-column trace.
///
/// Non-finite samples are dropped pairwise before anything else; mismatched
/// lengths, fewer than 3 surviving samples, flat signals, and `top_n == 0`
/// all yield `Ok(vec![])` rather than an error. The call is pure: caller
/// slices are never mutated and no state persists between invocations, so
/// concurrent calls on independent inputs need no coordination.
pub fn extract_top_peaks(
    x: &[f64],
    y: &[f64],
    params: &PeakParams,
) -> Result<Vec<PeakRange>, ParamError> {
    params.validate()?;
    if x.len() != y.len() {
        return Ok(Vec::new());
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .unzip();
    if xs.len() < 3 {
        return Ok(Vec::new());
    }

    match params.mode {
        PeakMode::Max => Ok(extract_from_signal(&xs, &ys, PeakKind::Max, params)),
        PeakMode::Min => {
            let negated: Vec<f64> = ys.iter().map(|v| -v).collect();
            Ok(extract_from_signal(&xs, &negated, PeakKind::Min, params))
        }
        PeakMode::Auto => {
            let peaks_max = extract_from_signal(&xs, &ys, PeakKind::Max, params);
            let negated: Vec<f64> = ys.iter().map(|v| -v).collect();
            let peaks_min = extract_from_signal(&xs, &negated, PeakKind::Min, params);

            let score_max: f64 = peaks_max.iter().map(|p| p.prominence).sum();
            let score_min: f64 = peaks_min.iter().map(|p| p.prominence).sum();
            // Ties keep the max-polarity set.
            Ok(if score_min > score_max {
                peaks_min
            } else {
                peaks_max
            })
        }
    }
}
