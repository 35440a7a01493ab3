//! # Membership Filter Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── filter_benchmarks.rs   # add / might_contain throughput
//! └── src/
//!     └── integration/
//!         ├── flows.rs           # End-to-end usage through the public API
//!         └── false_positives.rs # Statistical false positive checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p membership-tests
//!
//! # By category
//! cargo test -p membership-tests integration::flows
//! cargo test -p membership-tests integration::false_positives
//!
//! # Benchmarks
//! cargo bench -p membership-tests
//! ```
