//! # Integration Test Flows
//!
//! Exercises the filter the way a caller would: configure, add, query,
//! inspect.

#[cfg(test)]
mod tests {
    use membership_filter::{
        FilterConfig, FilterConfigBuilder, FilterError, HashAlgorithm, HashCountPolicy,
        MembershipFilter,
    };
    use proptest::prelude::*;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const BOOKS: [&str; 3] = ["1984", "Brave New World", "Fahrenheit 451"];

    fn book_filter() -> MembershipFilter {
        let config = FilterConfigBuilder::new()
            .capacity(50)
            .hash_count(3)
            .build()
            .expect("valid config");
        let mut filter = MembershipFilter::from_config(&config).expect("valid filter");
        for title in BOOKS {
            filter.add(title);
        }
        filter
    }

    // =========================================================================
    // FLOWS
    // =========================================================================

    #[test]
    fn test_books_flow() {
        let filter = book_filter();

        for title in BOOKS {
            assert!(filter.might_contain(title), "{} must be found", title);
        }
        assert!(!filter.might_contain("Dune"));
        assert_eq!(filter.bits_set(), 9);
    }

    #[test]
    fn test_default_filter_flow() {
        let mut filter = MembershipFilter::default();
        assert!(!filter.might_contain("1984"));

        filter.add("1984");
        assert_eq!(filter.compute_indices("1984"), vec![63, 99, 72]);
        assert!(filter.might_contain("1984"));
        assert!(!filter.might_contain("Dune"));
    }

    #[test]
    fn test_strict_policy_flow() {
        let config = FilterConfig {
            capacity: 50,
            hash_count: 4,
            hash_count_policy: HashCountPolicy::Reject,
        };

        let err = MembershipFilter::from_config(&config).unwrap_err();
        assert!(matches!(err, FilterError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("exceeds"));

        let clamped = MembershipFilter::from_config(&FilterConfig {
            hash_count_policy: HashCountPolicy::Clamp,
            ..config
        })
        .expect("clamp accepts oversize hash_count");
        assert_eq!(clamped.algorithms(), &HashAlgorithm::ALL);
    }

    #[test]
    fn test_sized_for_expected_items_flow() {
        let config = FilterConfig::for_expected_items(200, 0.05).expect("valid target");
        let mut filter = MembershipFilter::from_config(&config).unwrap();

        for i in 0..200 {
            filter.add(&format!("user_{}", i));
        }

        assert!(filter.false_positive_rate() <= 0.05);
        for i in 0..200 {
            assert!(filter.might_contain(&format!("user_{}", i)));
        }
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let json = serde_json::to_value(book_filter().stats()).expect("stats serialize");

        assert_eq!(json["capacity"], 50);
        assert_eq!(json["bits_set"], 9);
        assert_eq!(json["items_added"], 3);
        assert_eq!(json["algorithms"][2], "sha256");
    }

    proptest! {
        #[test]
        fn prop_bytes_and_str_agree(items in proptest::collection::vec("\\PC{0,24}", 1..30), query in "\\PC{0,24}") {
            let mut by_str = MembershipFilter::new(97, 3).unwrap();
            let mut by_bytes = MembershipFilter::new(97, 3).unwrap();
            for item in &items {
                by_str.add(item);
                by_bytes.add_bytes(item.as_bytes()).unwrap();
            }
            prop_assert_eq!(by_str.bits(), by_bytes.bits());
            prop_assert_eq!(
                by_str.might_contain(&query),
                by_bytes.might_contain_bytes(query.as_bytes()).unwrap()
            );
        }
    }
}
