/// Centered moving-average smoothing with boxcar "same" semantics: every
/// output sample is the sum of the in-bounds neighbors divided by the full
/// window length, so edge samples are attenuated as if the signal were
/// zero-padded.
///
/// A window of 1 or less disables smoothing, even windows are rounded up to
/// the next odd length, and signals shorter than the effective window are
/// returned unchanged rather than erroring.
pub fn moving_average(y: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return y.to_vec();
    }
    let width = if window % 2 == 0 { window + 1 } else { window };
    if y.len() < width {
        return y.to_vec();
    }

    let half = width / 2;
    let scale = 1.0 / width as f64;
    let mut smoothed = Vec::with_capacity(y.len());
    for idx in 0..y.len() {
        let lo = idx.saturating_sub(half);
        let hi = (idx + half + 1).min(y.len());
        let sum: f64 = y[lo..hi].iter().sum();
        smoothed.push(sum * scale);
    }
    smoothed
}
