//! Membership filter configuration and validation
//!
//! # Example
//!
//! ```
//! use membership_filter::{FilterConfigBuilder, HashCountPolicy};
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity(50)
//!     .hash_count(3)
//!     .hash_count_policy(HashCountPolicy::Reject)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.capacity, 50);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_functions::HashAlgorithm;
use super::parameters::{minimum_capacity, MAX_CAPACITY};
use crate::error::FilterError;

/// Default number of bits in a filter
pub const DEFAULT_CAPACITY: usize = 100;

/// Default number of hash functions
pub const DEFAULT_HASH_COUNT: usize = HashAlgorithm::COUNT;

/// What to do with a `hash_count` larger than the number of hash algorithms
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashCountPolicy {
    /// Use every available algorithm and log a warning
    #[default]
    Clamp,
    /// Fail with [`FilterError::InvalidConfiguration`]
    Reject,
}

/// Membership filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of bits in the filter (m)
    pub capacity: usize,
    /// Requested number of hash functions (k)
    pub hash_count: usize,
    /// Handling of `hash_count` above [`HashAlgorithm::COUNT`]
    #[serde(default)]
    pub hash_count_policy: HashCountPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash_count: DEFAULT_HASH_COUNT,
            hash_count_policy: HashCountPolicy::Clamp,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            hash_count,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Size a configuration so that `expected_items` insertions keep the
    /// theoretical false positive rate at or below `target_fpr`
    ///
    /// Uses every available hash algorithm.
    pub fn for_expected_items(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        if !(target_fpr > 0.0 && target_fpr < 1.0) {
            return Err(FilterError::invalid_configuration(format!(
                "target false positive rate must be in (0, 1), got {}",
                target_fpr
            )));
        }

        let capacity = minimum_capacity(expected_items, DEFAULT_HASH_COUNT, target_fpr).ok_or_else(
            || {
                FilterError::invalid_configuration(format!(
                    "{} items at false positive rate {} need more than {} bits",
                    expected_items, target_fpr, MAX_CAPACITY
                ))
            },
        )?;

        Self::new(capacity, DEFAULT_HASH_COUNT)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity == 0 {
            return Err(FilterError::invalid_configuration(
                "capacity must be positive",
            ));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(FilterError::invalid_configuration(format!(
                "capacity {} exceeds the maximum of {} bits",
                self.capacity, MAX_CAPACITY
            )));
        }

        if self.hash_count == 0 {
            return Err(FilterError::invalid_configuration(
                "hash_count must be positive",
            ));
        }

        if self.hash_count > HashAlgorithm::COUNT && self.hash_count_policy == HashCountPolicy::Reject
        {
            return Err(FilterError::invalid_configuration(format!(
                "hash_count {} exceeds the {} available hash algorithms",
                self.hash_count,
                HashAlgorithm::COUNT
            )));
        }

        Ok(())
    }

    /// Number of hash functions a filter built from this config will use
    pub fn effective_hash_count(&self) -> usize {
        self.hash_count.min(HashAlgorithm::COUNT)
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set hash count
    pub fn with_hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = hash_count;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity: Option<usize>,
    hash_count: Option<usize>,
    hash_count_policy: Option<HashCountPolicy>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bits
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the number of hash functions
    pub fn hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = Some(hash_count);
        self
    }

    /// Set how an oversize hash count is handled
    pub fn hash_count_policy(mut self, policy: HashCountPolicy) -> Self {
        self.hash_count_policy = Some(policy);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
            hash_count_policy: self.hash_count_policy.unwrap_or(defaults.hash_count_policy),
        };

        config.validate()?;
        Ok(config)
    }
}
