//! Deterministic string collections used as benchmark inputs.
//!
//! Every collection is a run of consecutive integers rendered as decimal
//! strings, with a modulus-based skip rule punching holes in the run so that
//! different moduli yield collections of different composition. No randomness:
//! the same `(len, skip_modulus)` always produces the same collection.

/// First candidate value. Starting at 1000 keeps every generated string short
/// (four digits for the lengths the driver uses) and free of leading zeros.
const BASE: u64 = 1000;

/// Builds an ordered collection of short decimal-digit strings.
///
/// Walks `len` candidate values upward from 1000 and drops every candidate
/// divisible by `skip_modulus`, so the result holds at most `len` strings,
/// in strictly increasing numeric order with no duplicates.
///
/// `skip_modulus` must be nonzero; a zero modulus panics on the first
/// candidate.
pub fn numeric_strings(len: usize, skip_modulus: u64) -> Vec<String> {
    let mut strings = Vec::with_capacity(len);
    for offset in 0..len as u64 {
        let value = BASE + offset;
        if value % skip_modulus == 0 {
            continue;
        }
        strings.push(value.to_string());
    }
    strings
}
