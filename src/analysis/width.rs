/// X-coordinate where the segment between samples `i0` and `i1` crosses
/// `level`. A flat segment returns `x[i0]` instead of dividing by zero.
fn interp_x_at_level(x: &[f64], s: &[f64], i0: usize, i1: usize, level: f64) -> f64 {
    let (x0, x1) = (x[i0], x[i1]);
    let (y0, y1) = (s[i0], s[i1]);
    if y0 == y1 {
        return x0;
    }
    let t = (level - y0) / (y1 - y0);
    x0 + t * (x1 - x0)
}

/// Approximate half-prominence range of the peak at `peak_i`, bounded by its
/// flanking minima `left_min_i` and `right_min_i`.
///
/// Each side walks outward from the apex, stepping only onto samples strictly
/// above `baseline + prominence / 2`, and interpolates the crossing on the
/// segment where the walk stopped. A walk whose first neighbor already sits
/// at or below that level collapses to `x[peak_i]`; a walk that lands on the
/// flanking minimum clips there, interpolating on the segment adjacent to
/// the minimum (the resulting x may fall outside the true crossing). The
/// returned pair is not yet normalized to `left <= right`.
pub fn half_prominence_range(
    x: &[f64],
    s: &[f64],
    peak_i: usize,
    left_min_i: usize,
    right_min_i: usize,
    baseline: f64,
    prominence: f64,
) -> (f64, f64) {
    let level = baseline + 0.5 * prominence;

    let mut li = peak_i;
    while li > left_min_i && s[li - 1] > level {
        li -= 1;
    }
    let left_x = if li == peak_i {
        x[peak_i]
    } else if li == left_min_i {
        interp_x_at_level(x, s, li, li + 1, level)
    } else {
        interp_x_at_level(x, s, li - 1, li, level)
    };

    let mut ri = peak_i;
    while ri < right_min_i && s[ri + 1] > level {
        ri += 1;
    }
    let right_x = if ri == peak_i {
        x[peak_i]
    } else if ri == right_min_i {
        interp_x_at_level(x, s, ri - 1, ri, level)
    } else {
        interp_x_at_level(x, s, ri, ri + 1, level)
    };

    (left_x, right_x)
}
