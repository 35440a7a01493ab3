//! # Membership Filter
//!
//! A fixed-capacity Bloom filter for string membership queries.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `MembershipFilter`: Bit vector plus up to three hash functions
//!   - `HashAlgorithm`: MD5, SHA-1 and SHA-256, selected in that order
//!   - `FilterConfig`: Configuration with validation
//!   - `FilterConfigBuilder`: Fluent builder for configuration
//!
//! - **Telemetry** (`telemetry`): Log subscriber setup for binaries
//!
//! ## Invariants
//!
//! - **No false negatives**: if added, `might_contain()` MUST return true
//! - **Fixed size**: the bit vector never grows, shrinks or clears
//! - **FPR**: expected false positive rate is (1 - e^(-kn/m))^k
//!
//! ## Usage Example
//!
//! ```
//! use membership_filter::{FilterConfigBuilder, MembershipFilter};
//!
//! let config = FilterConfigBuilder::new().capacity(50).hash_count(3).build()?;
//! let mut filter = MembershipFilter::from_config(&config)?;
//!
//! filter.add("1984");
//! filter.add("Brave New World");
//! filter.add("Fahrenheit 451");
//!
//! assert!(filter.might_contain("1984"));
//! assert!(!filter.might_contain("Dune"));
//! # Ok::<(), membership_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{
    FilterConfig, FilterConfigBuilder, FilterStats, HashAlgorithm, HashCountPolicy,
    MembershipFilter,
};
pub use error::FilterError;
