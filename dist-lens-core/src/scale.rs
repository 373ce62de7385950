//! Value <-> axis-position mapping, linear or logarithmic, in percent.

fn log_usable(min: f64, max: f64, value: f64) -> bool {
    min > 0.0 && max > 0.0 && value > 0.0
}

/// Position of `value` along `[min, max]` as a percentage in `[0, 100]`.
///
/// A degenerate range (`max == min`) maps to 0. Logarithmic mapping is only
/// applied when min, max and value are all positive; otherwise the linear
/// formula is used, so callers never see an error for non-positive domains.
pub fn threshold_to_percentage(min: f64, max: f64, value: f64, log_scale: bool) -> f64 {
    if max == min {
        return 0.0;
    }
    if log_scale && log_usable(min, max, value) {
        (value.ln() - min.ln()) / (max.ln() - min.ln()) * 100.0
    } else {
        (value - min) / (max - min) * 100.0
    }
}

/// Inverse of [`threshold_to_percentage`], with the same linear fallback for
/// non-positive logarithmic domains. A degenerate range returns `min`.
pub fn percentage_to_threshold(min: f64, max: f64, pct: f64, log_scale: bool) -> f64 {
    if max == min {
        return min;
    }
    if log_scale && min > 0.0 && max > 0.0 {
        (min.ln() + pct / 100.0 * (max.ln() - min.ln())).exp()
    } else {
        min + pct / 100.0 * (max - min)
    }
}
