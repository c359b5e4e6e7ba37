//! Two equivalent subset predicates: "is every element of the probe present
//! in the haystack", answered either by scanning the haystack linearly for
//! each probe element or by building a `HashSet` from the haystack once and
//! probing it.
//!
//! The hash set is asymptotically better, but it pays an allocation plus
//! per-element hashing on every call, while the scan allocates nothing. For
//! small collections (up to roughly 50-100 elements) the scan tends to win;
//! the binary in this crate measures where the crossover actually sits.

use std::collections::HashSet;
use std::hash::Hash;

/// Strategy 1, element level: linear scan, short-circuiting on the first
/// match. O(n) time, no allocation.
pub fn contains_scan<T>(needle: &T, haystack: &[T]) -> bool
where
    T: Eq,
{
    haystack.iter().any(|item| item == needle)
}

/// Strategy 1, collection level: every probe element is linearly searched in
/// the haystack, stopping at the first element that is missing.
/// O(probe × haystack) time, no allocation.
pub fn is_subset_scan<T>(probe: &[T], haystack: &[T]) -> bool
where
    T: Eq,
{
    probe.iter().all(|item| contains_scan(item, haystack))
}

/// Strategy 2, element level: build a `HashSet` over the haystack, then test
/// containment. O(n) time and space.
///
/// The set is rebuilt from scratch on every call; that rebuild is exactly
/// the cost being compared against the scan.
pub fn contains_hashset<T>(needle: &T, haystack: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut lookup = HashSet::with_capacity(haystack.len());
    for item in haystack {
        lookup.insert(item);
    }
    lookup.contains(needle)
}

/// Strategy 2, collection level: one `HashSet` built over the haystack, then
/// each probe element tested against it, stopping at the first miss.
/// O(probe + haystack) expected time, O(haystack) space.
pub fn is_subset_hashset<T>(probe: &[T], haystack: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut lookup = HashSet::with_capacity(haystack.len());
    for item in haystack {
        lookup.insert(item);
    }
    probe.iter().all(|item| lookup.contains(item))
}
