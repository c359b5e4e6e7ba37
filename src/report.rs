//! One printed row per timed comparison.

use std::fmt::{self, Display};
use std::hash::Hash;
use std::hint::black_box;
use std::time::Duration;

use crate::subset;
use crate::timing;

/// Elapsed wall-clock time of both strategies over one
/// (iterations, collection-pair) combination. Built, printed, dropped;
/// nothing aggregates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub iterations: usize,
    pub label: String,
    pub linear: Duration,
    pub strmap: Duration,
}

impl Comparison {
    /// Times both strategies over the same pair, linear scan first. Inputs
    /// go through `black_box` on every call so the optimizer cannot hoist
    /// the loop-invariant check out of the timed loop.
    pub fn run<T>(iterations: usize, label: &str, probe: &[T], haystack: &[T]) -> Self
    where
        T: Eq + Hash,
    {
        let linear = timing::time_checks(iterations, || {
            subset::is_subset_scan(black_box(probe), black_box(haystack))
        });
        let strmap = timing::time_checks(iterations, || {
            subset::is_subset_hashset(black_box(probe), black_box(haystack))
        });
        Self {
            iterations,
            label: label.to_owned(),
            linear,
            strmap,
        }
    }

    /// True when the linear scan beat the hash set on this sample.
    pub fn linear_wins(&self) -> bool {
        self.linear < self.strmap
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iterations: {}\ttest: {}\tlinear: {:?}\tstrmap: {:?}\tlinear < strmap: {}",
            self.iterations,
            self.label,
            self.linear,
            self.strmap,
            self.linear_wins()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::numeric_strings;

    #[test]
    fn row_renders_every_field_tab_separated() {
        let row = Comparison {
            iterations: 1000,
            label: "B,C".to_owned(),
            linear: Duration::from_micros(1500),
            strmap: Duration::from_millis(2),
        };
        assert_eq!(
            row.to_string(),
            "iterations: 1000\ttest: B,C\tlinear: 1.5ms\tstrmap: 2ms\tlinear < strmap: true"
        );
    }

    #[test]
    fn equal_samples_do_not_count_as_a_linear_win() {
        let row = Comparison {
            iterations: 10,
            label: "C,D".to_owned(),
            linear: Duration::from_micros(7),
            strmap: Duration::from_micros(7),
        };
        assert!(!row.linear_wins());
    }

    #[test]
    fn run_carries_the_requested_parameters() {
        let probe = numeric_strings(10, 2);
        let haystack = numeric_strings(10, 3);
        let row = Comparison::run(50, "B,C", &probe, &haystack);
        assert_eq!(row.iterations, 50);
        assert_eq!(row.label, "B,C");
    }
}
