/// Pixel budget per tick when no explicit count is requested.
const PX_PER_TICK: f64 = 40.0;
const MIN_TICKS: usize = 6;

/// Ordered tick values spanning `[min, max]`, evenly spaced in linear space
/// or, when `log_scale` and `min > 0`, evenly spaced in log space and
/// exponentiated back. A non-positive minimum falls back to linear spacing
/// (same rule as the scale mapping) so the axis never disappears.
///
/// The tick count is `requested` when given, otherwise derived from the
/// available width with a floor of 6. Degenerate ranges and resolved counts
/// below 2 produce no ticks. The first tick is exactly `min`, the last
/// exactly `max`.
pub fn compute_ticks(
    min: f64,
    max: f64,
    log_scale: bool,
    width_px: f64,
    requested: Option<usize>,
) -> Vec<f64> {
    if max == min {
        return Vec::new();
    }
    let count =
        requested.unwrap_or_else(|| ((width_px / PX_PER_TICK).round() as usize).max(MIN_TICKS));
    if count < 2 {
        return Vec::new();
    }
    let last = count - 1;
    let log = log_scale && min > 0.0 && max > 0.0;
    (0..count)
        .map(|i| {
            if i == 0 {
                min
            } else if i == last {
                max
            } else if log {
                (min.ln() + (max.ln() - min.ln()) * i as f64 / last as f64).exp()
            } else {
                min + (max - min) * i as f64 / last as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_drives_count_with_floor_of_six() {
        assert_eq!(compute_ticks(0.0, 1.0, false, 80.0, None).len(), 6);
        assert_eq!(compute_ticks(0.0, 1.0, false, 400.0, None).len(), 10);
        assert_eq!(compute_ticks(0.0, 1.0, false, 800.0, None).len(), 20);
    }

    #[test]
    fn explicit_count_spans_range() {
        let ticks = compute_ticks(0.0, 100.0, false, 640.0, Some(5));
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(compute_ticks(3.0, 3.0, false, 640.0, None).is_empty());
    }

    #[test]
    fn count_below_two_has_no_ticks() {
        assert!(compute_ticks(0.0, 1.0, false, 640.0, Some(1)).is_empty());
        assert!(compute_ticks(0.0, 1.0, false, 640.0, Some(0)).is_empty());
    }

    #[test]
    fn log_ticks_are_evenly_spaced_in_log_space() {
        let ticks = compute_ticks(1.0, 100.0, true, 640.0, Some(3));
        assert_eq!(ticks[0], 1.0);
        assert!((ticks[1] - 10.0).abs() < 1e-9);
        assert_eq!(ticks[2], 100.0);
    }

    #[test]
    fn log_with_nonpositive_min_falls_back_to_linear() {
        let ticks = compute_ticks(0.0, 100.0, true, 640.0, Some(5));
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn ticks_are_sorted_and_bounded() {
        let ticks = compute_ticks(2.5, 97.5, false, 503.0, None);
        assert!(ticks.len() >= 6);
        assert_eq!(ticks[0], 2.5);
        assert_eq!(*ticks.last().unwrap(), 97.5);
        for pair in ticks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
