//! Password strength metrics.
//!
//! Two measures per the tool's contract: the empirical Shannon entropy of
//! the password's own symbol distribution (a deliberately weaker,
//! sample-based number, not the pool's theoretical entropy) and the
//! theoretical brute-force search space with a derived crack-time estimate.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{Pow, ToPrimitive, Zero};

const SECONDS_PER_YEAR: f64 = 3600.0 * 24.0 * 365.0;

/// Strength metrics for one generated password. Transient; recomputed per
/// password and never persisted.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub entropy_bits: f64,
    pub search_space: BigUint,
    /// None when the search space is empty ("not applicable").
    pub brute_force_years: Option<f64>,
}

/// Compute all metrics for a password drawn from a pool of `pool_size`
/// symbols, at `guesses_per_second` brute-force speed.
pub fn compute(password: &str, pool_size: usize, guesses_per_second: f64) -> Metrics {
    let search_space = search_space(password.chars().count(), pool_size);
    let brute_force_years = brute_force_years(&search_space, guesses_per_second);
    Metrics {
        entropy_bits: shannon_entropy(password),
        search_space,
        brute_force_years,
    }
}

/// Empirical Shannon entropy in bits: -sum p*log2(p) over the observed
/// per-symbol frequency distribution. Empty input yields 0.
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let length = password.chars().count() as f64;

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    let mut entropy = 0.0;
    for count in freq.values() {
        let p = *count as f64 / length;
        entropy -= p * p.log2();
    }
    entropy
}

/// Total count of distinct possible passwords: pool_size^length.
///
/// Unbounded precision; 94^64 has 127 decimal digits and truncating to a
/// fixed-width integer would be a correctness bug, not an approximation.
/// Returns 0 when the pool is empty or the length is 0.
pub fn search_space(length: usize, pool_size: usize) -> BigUint {
    if pool_size == 0 || length == 0 {
        return BigUint::zero();
    }
    Pow::pow(BigUint::from(pool_size), length)
}

/// Years to exhaust the search space at the given guess rate, or None when
/// the search space is empty or the rate is non-positive.
pub fn brute_force_years(search_space: &BigUint, guesses_per_second: f64) -> Option<f64> {
    if search_space.is_zero() || guesses_per_second <= 0.0 {
        return None;
    }
    let space = search_space.to_f64().unwrap_or(f64::INFINITY);
    Some(space / guesses_per_second / SECONDS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{ToPrimitive, Zero};

    #[test]
    fn entropy_of_empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn entropy_of_uniform_repeat_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn entropy_of_two_equiprobable_symbols_is_one_bit() {
        assert_eq!(shannon_entropy("ab"), 1.0);
        assert_eq!(shannon_entropy("abab"), 1.0);
    }

    #[test]
    fn entropy_of_four_distinct_symbols_is_two_bits() {
        let e = shannon_entropy("abcd");
        assert!((e - 2.0).abs() < 1e-12, "{e}");
    }

    #[test]
    fn search_space_degenerate_cases_are_zero() {
        assert_eq!(search_space(0, 94), BigUint::zero());
        assert_eq!(search_space(16, 0), BigUint::zero());
        assert_eq!(search_space(0, 0), BigUint::zero());
    }

    #[test]
    fn search_space_small_case() {
        assert_eq!(search_space(4, 2), BigUint::from(16u32));
    }

    #[test]
    fn search_space_exceeds_fixed_width_integers() {
        // 94^64 has 127 decimal digits; u128 tops out at 39.
        let space = search_space(64, 94);
        assert_eq!(space.to_string().len(), 127);
        assert!(space.to_u128().is_none());
    }

    #[test]
    fn brute_force_not_applicable_for_empty_space() {
        assert_eq!(brute_force_years(&BigUint::zero(), 1e12), None);
    }

    #[test]
    fn brute_force_one_second_of_guessing() {
        // 10^12 guesses at 10^12/s is one second, about 3.17e-8 years.
        let space = search_space(12, 10);
        let years = brute_force_years(&space, 1e12).unwrap();
        let expected = 1.0 / SECONDS_PER_YEAR;
        assert!((years - expected).abs() < 1e-20, "{years}");
        assert!((years - 3.17e-8).abs() < 1e-10);
    }

    #[test]
    fn compute_bundles_all_three() {
        let metrics = compute("ab", 2, 1e12);
        assert_eq!(metrics.entropy_bits, 1.0);
        assert_eq!(metrics.search_space, BigUint::from(4u32));
        assert!(metrics.brute_force_years.is_some());
    }
}
