use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which side of the threshold counts as "passing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Lt,
    #[default]
    Lte,
    Gt,
    Gte,
}

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Lt => "lt",
            FilterMode::Lte => "lte",
            FilterMode::Gt => "gt",
            FilterMode::Gte => "gte",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FilterMode::Lt => "<",
            FilterMode::Lte => "<=",
            FilterMode::Gt => ">",
            FilterMode::Gte => ">=",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            FilterMode::Lt => FilterMode::Lte,
            FilterMode::Lte => FilterMode::Gt,
            FilterMode::Gt => FilterMode::Gte,
            FilterMode::Gte => FilterMode::Lt,
        }
    }
}

impl FromStr for FilterMode {
    type Err = std::convert::Infallible;

    // unrecognized operators fall back to lte
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "lt" => FilterMode::Lt,
            "gt" => FilterMode::Gt,
            "gte" => FilterMode::Gte,
            _ => FilterMode::Lte,
        })
    }
}

/// Smallest index i with `sorted[i] >= t`, i.e. the count of elements `< t`.
pub fn lower_bound(sorted: &[f64], t: f64) -> usize {
    sorted.partition_point(|&v| v < t)
}

/// Smallest index i with `sorted[i] > t`, i.e. the count of elements `<= t`.
pub fn upper_bound(sorted: &[f64], t: f64) -> usize {
    sorted.partition_point(|&v| v <= t)
}

/// Number of elements of `sorted` satisfying `v <mode> t`. Runs of duplicate
/// values are included or excluded whole, never split.
pub fn count_matching(sorted: &[f64], mode: FilterMode, t: f64) -> u64 {
    let n = sorted.len();
    let count = match mode {
        FilterMode::Lt => lower_bound(sorted, t),
        FilterMode::Lte => upper_bound(sorted, t),
        FilterMode::Gt => n - upper_bound(sorted, t),
        FilterMode::Gte => n - lower_bound(sorted, t),
    };
    count as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: [f64; 5] = [1.0, 2.0, 2.0, 5.0, 9.0];

    #[test] fn lt_2() { assert_eq!(count_matching(&S, FilterMode::Lt, 2.0), 1); }
    #[test] fn lte_2() { assert_eq!(count_matching(&S, FilterMode::Lte, 2.0), 3); }
    #[test] fn gt_5() { assert_eq!(count_matching(&S, FilterMode::Gt, 5.0), 1); }
    #[test] fn gte_5() { assert_eq!(count_matching(&S, FilterMode::Gte, 5.0), 2); }

    #[test]
    fn empty_counts_zero() {
        for mode in [FilterMode::Lt, FilterMode::Lte, FilterMode::Gt, FilterMode::Gte] {
            assert_eq!(count_matching(&[], mode, 1.0), 0);
        }
    }

    #[test]
    fn bounds_bracket_duplicates() {
        for t in [0.0, 1.0, 2.0, 3.5, 5.0, 9.0, 10.0] {
            let lo = lower_bound(&S, t);
            let hi = upper_bound(&S, t);
            assert!(lo <= hi);
            let multiplicity = S.iter().filter(|&&v| v == t).count();
            assert_eq!(hi - lo, multiplicity, "t={t}");
        }
    }

    #[test]
    fn complements_partition_the_set() {
        for t in [-1.0, 1.0, 2.0, 4.9, 5.0, 9.0, 42.0] {
            let n = S.len() as u64;
            assert_eq!(count_matching(&S, FilterMode::Lt, t) + count_matching(&S, FilterMode::Gte, t), n);
            assert_eq!(count_matching(&S, FilterMode::Lte, t) + count_matching(&S, FilterMode::Gt, t), n);
        }
    }

    #[test]
    fn lte_count_is_monotonic_in_t() {
        let thresholds = [-2.0, 0.5, 1.0, 2.0, 2.5, 5.0, 8.0, 9.0, 11.0];
        let mut last_lte = 0;
        let mut last_gte = S.len() as u64;
        for t in thresholds {
            let lte = count_matching(&S, FilterMode::Lte, t);
            let gte = count_matching(&S, FilterMode::Gte, t);
            assert!(lte >= last_lte);
            assert!(gte <= last_gte);
            last_lte = lte;
            last_gte = gte;
        }
    }

    #[test]
    fn unknown_operator_string_defaults_to_lte() {
        let mode: FilterMode = "between".parse().unwrap_or_default();
        assert_eq!(mode, FilterMode::Lte);
        let mode: FilterMode = "gte".parse().unwrap_or_default();
        assert_eq!(mode, FilterMode::Gte);
    }
}
