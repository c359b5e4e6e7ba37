//! Micro-benchmark comparing two ways of checking that every string in one
//! collection occurs in another: scanning the haystack linearly per probe
//! element, or building a `HashSet` from the haystack once and probing it.
//!
//! The library holds the deterministic input generator, the two predicate
//! strategies, the repeated-call timing harness and the row formatting; the
//! `scanmap` binary drives a fixed grid of collection lengths, iteration
//! counts and collection pairs and prints one comparison line per
//! combination.

pub mod corpus;
pub mod report;
pub mod subset;
pub mod timing;
