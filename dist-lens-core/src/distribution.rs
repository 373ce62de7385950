use serde::{Deserialize, Serialize};

/// Datasets up to this size keep one point per element.
pub const EXACT_POINT_LIMIT: usize = 50;
/// Larger datasets are binned into at most this many intervals.
pub const MAX_BINS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    pub value: f64,
    pub cumulative_count: u64,
}

/// Sorted copy of the input plus the plottable cumulative series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub sorted: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub points: Vec<DistributionPoint>,
}

impl Distribution {
    pub fn len(&self) -> usize {
        self.sorted.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

pub fn build_distribution(values: &[f64]) -> Distribution {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n == 0 {
        return Distribution {
            sorted,
            min: 0.0,
            max: 0.0,
            points: Vec::new(),
        };
    }
    let min = sorted[0];
    let max = sorted[n - 1];
    if min == max {
        // all mass at one value: a single vertical jump
        let points = vec![
            DistributionPoint { value: min, cumulative_count: 0 },
            DistributionPoint { value: min, cumulative_count: n as u64 },
        ];
        return Distribution { sorted, min, max, points };
    }
    let points = if n <= EXACT_POINT_LIMIT {
        sorted
            .iter()
            .enumerate()
            .map(|(i, &v)| DistributionPoint {
                value: v,
                cumulative_count: i as u64 + 1,
            })
            .collect()
    } else {
        let bins = MAX_BINS.min(n);
        let width = (max - min) / bins as f64;
        let mut points = Vec::with_capacity(bins + 1);
        let mut cursor = 0usize; // advances monotonically over the sorted slice
        for i in 0..=bins {
            let boundary = if i == bins { max } else { min + i as f64 * width };
            while cursor < n && sorted[cursor] <= boundary {
                cursor += 1;
            }
            points.push(DistributionPoint {
                value: boundary,
                cumulative_count: cursor as u64,
            });
        }
        points
    };
    Distribution { sorted, min, max, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let d = build_distribution(&[]);
        assert!(d.is_empty());
        assert_eq!(d.min, 0.0);
        assert_eq!(d.max, 0.0);
        assert!(d.points.is_empty());
    }

    #[test]
    fn identical_values_form_vertical_jump() {
        let d = build_distribution(&[4.0; 7]);
        assert_eq!(d.points.len(), 2);
        assert_eq!(d.points[0], DistributionPoint { value: 4.0, cumulative_count: 0 });
        assert_eq!(d.points[1], DistributionPoint { value: 4.0, cumulative_count: 7 });
    }

    #[test]
    fn small_input_keeps_exact_points() {
        let d = build_distribution(&[3.0, 1.0, 2.0]);
        assert_eq!(d.sorted, vec![1.0, 2.0, 3.0]);
        let counts: Vec<u64> = d.points.iter().map(|p| p.cumulative_count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
        assert_eq!(d.points.last().map(|p| p.cumulative_count), Some(3));
    }

    #[test]
    fn exact_mode_includes_duplicates() {
        let d = build_distribution(&[2.0, 1.0, 2.0]);
        let values: Vec<f64> = d.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn large_input_is_binned() {
        let values: Vec<f64> = (0..500).map(|i| i as f64).collect();
        let d = build_distribution(&values);
        assert_eq!(d.points.len(), MAX_BINS + 1);
        assert_eq!(d.points[0].value, 0.0);
        assert_eq!(d.points.last().map(|p| p.value), Some(499.0));
        // final boundary covers the whole set
        assert_eq!(d.points.last().map(|p| p.cumulative_count), Some(500));
    }

    #[test]
    fn bin_count_capped_by_n() {
        let values: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let d = build_distribution(&values);
        assert_eq!(d.points.len(), 61);
    }

    #[test]
    fn cumulative_counts_never_decrease() {
        let values: Vec<f64> = (0..300).map(|i| ((i * 37) % 113) as f64).collect();
        let d = build_distribution(&values);
        for pair in d.points.windows(2) {
            assert!(pair[0].cumulative_count <= pair[1].cumulative_count);
        }
    }

    #[test]
    fn binned_counts_match_upper_bound_semantics() {
        let values: Vec<f64> = (0..200).map(|i| (i % 50) as f64).collect();
        let d = build_distribution(&values);
        for p in &d.points {
            let expected = d.sorted.iter().filter(|&&v| v <= p.value).count() as u64;
            assert_eq!(p.cumulative_count, expected);
        }
    }
}
