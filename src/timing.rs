//! Repeated-call wall-clock timing.
//!
//! One `Instant` before the first call, one `elapsed` after the last: a
//! single total-duration sample per measurement, deliberately without warm-up
//! or averaging. Repeating the call amortizes clock resolution; the crate's
//! criterion bench is the statistically careful counterpart.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `check` exactly `iterations` times back to back and returns the total
/// elapsed wall-clock time.
///
/// The boolean results are discarded, but routed through
/// [`std::hint::black_box`] so the optimizer cannot drop the calls and leave
/// an empty loop to be timed.
pub fn time_checks<F>(iterations: usize, mut check: F) -> Duration
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(check());
    }
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::numeric_strings;
    use crate::subset::is_subset_scan;

    #[test]
    fn zero_iterations_never_invokes_the_check() {
        let elapsed = time_checks(0, || unreachable!());
        // Two adjacent clock reads; anything near a real measurement means
        // the loop ran.
        assert!(elapsed < Duration::from_millis(10));
    }

    #[test]
    fn runs_the_check_exactly_n_times() {
        let mut calls = 0_usize;
        let elapsed = time_checks(1000, || {
            calls += 1;
            true
        });
        assert_eq!(calls, 1000);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn real_work_takes_measurable_time() {
        let probe = numeric_strings(60, 2);
        let haystack = numeric_strings(60, 3);
        let elapsed = time_checks(5_000, || is_subset_scan(&probe, &haystack));
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn elapsed_accumulates_over_iterations() {
        // Sleep guarantees an at-least duration, so the lower bound holds
        // regardless of scheduler noise.
        let per_call = Duration::from_millis(2);
        let elapsed = time_checks(5, || {
            std::thread::sleep(per_call);
            true
        });
        assert!(elapsed >= per_call * 5);
    }
}
