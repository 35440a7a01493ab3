//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Core membership filter implementation
//! - Hash functions
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod hash_functions;
pub mod membership_filter;
pub mod parameters;

pub use config::{FilterConfig, FilterConfigBuilder, HashCountPolicy};
pub use hash_functions::HashAlgorithm;
pub use membership_filter::{FilterStats, MembershipFilter};
pub use parameters::{calculate_fpr, minimum_capacity, optimal_k};
