//! Hash functions for the membership filter
//!
//! Three independent digest families (MD5, SHA-1, SHA-256) are applied to the
//! UTF-8 bytes of an item. Each digest is read as one big-endian unsigned
//! integer and reduced modulo the filter capacity, so an index is exactly
//! `int(hexdigest, 16) % capacity`.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Closed set of digest algorithms a filter can draw its hash functions from
///
/// Order matters: a filter with `hash_count = k` uses the first `k`
/// entries of [`HashAlgorithm::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

static ALGORITHMS: [HashAlgorithm; HashAlgorithm::COUNT] = HashAlgorithm::ALL;

impl HashAlgorithm {
    /// All available algorithms, in selection order
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
    ];

    /// Number of available algorithms; the upper bound for `hash_count`
    pub const COUNT: usize = Self::ALL.len();

    /// The first `n` algorithms (all of them if `n` exceeds [`Self::COUNT`])
    pub fn first(n: usize) -> &'static [HashAlgorithm] {
        &ALGORITHMS[..n.min(Self::COUNT)]
    }

    /// Short lowercase name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Raw digest of `data`
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => md5::compute(data).0.to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Bit index of `data` in a filter of `capacity` bits
    ///
    /// `capacity` must be non-zero.
    pub fn index(&self, data: &[u8], capacity: usize) -> usize {
        reduce_digest(&self.digest(data), capacity)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduce a big-endian digest modulo `modulus` without truncating it
///
/// Horner's rule over bytes; the accumulator stays below `modulus`, so
/// `acc * 256 + 255` always fits in a `u128`.
pub fn reduce_digest(digest: &[u8], modulus: usize) -> usize {
    debug_assert!(modulus > 0, "modulus must be positive");
    let m = modulus as u128;
    let acc = digest
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % m);
    acc as usize
}

/// Compute one bit index per algorithm for `element`
pub fn compute_hash_positions(
    element: &[u8],
    algorithms: &[HashAlgorithm],
    capacity: usize,
) -> Vec<usize> {
    algorithms
        .iter()
        .map(|algorithm| algorithm.index(element, capacity))
        .collect()
}
