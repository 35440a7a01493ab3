//! Bloom filter parameter calculation
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k
//! - k = (m/n) * ln(2)                   -- optimal hash functions
//! - m = -k*n / ln(1 - fpr^(1/k))        -- bits needed at a fixed k

use std::f64::consts::LN_2;

use bitvec::prelude::*;

use super::hash_functions::HashAlgorithm;

/// Largest bit count a filter can hold
pub const MAX_CAPACITY: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

/// Calculate the theoretical false positive rate
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Calculate the optimal k for given m and n, limited to the available
/// hash algorithms
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return HashAlgorithm::COUNT;
    }
    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    k.clamp(1, HashAlgorithm::COUNT)
}

/// Smallest capacity (in bits) that keeps the theoretical FPR at or below
/// `target_fpr` after `n` insertions with `k` hash functions
///
/// `target_fpr` must lie in (0, 1) and `k` must be positive. Returns `None`
/// when the required size is not finite or exceeds [`MAX_CAPACITY`].
pub fn minimum_capacity(n: usize, k: usize, target_fpr: f64) -> Option<usize> {
    if n == 0 {
        return Some(1);
    }
    let per_hash = target_fpr.powf(1.0 / k as f64);
    let m = (-(k as f64) * (n as f64) / (1.0 - per_hash).ln()).ceil();

    // MAX_CAPACITY as f64 rounds up to a power of two, hence `>=`
    if !m.is_finite() || m < 0.0 || m >= MAX_CAPACITY as f64 {
        return None;
    }
    Some((m as usize).max(1))
}
