pub mod extract;
pub mod extrema;
pub mod smooth;
pub mod width;

pub use extract::extract_top_peaks;
pub use extrema::{local_maxima_indices, nearest_local_min_left, nearest_local_min_right};
pub use smooth::moving_average;
pub use width::half_prominence_range;
