//! # False Positive Rate
//!
//! Empirical false positive rates measured over many non-member queries must
//! track the theoretical (1 - e^(-kn/m))^k.

#[cfg(test)]
mod tests {
    use membership_filter::domain::calculate_fpr;
    use membership_filter::MembershipFilter;
    use rand::distributions::Alphanumeric;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CAPACITY: usize = 10_000;
    const QUERIES: usize = 50_000;

    fn filled(n: usize) -> MembershipFilter {
        let mut filter = MembershipFilter::new(CAPACITY, 3).unwrap();
        for i in 0..n {
            filter.add(&format!("member_{}", i));
        }
        filter
    }

    fn empirical_fpr<I>(filter: &MembershipFilter, queries: I) -> f64
    where
        I: IntoIterator<Item = String>,
    {
        let mut total = 0usize;
        let mut hits = 0usize;
        for query in queries {
            total += 1;
            if filter.might_contain(&query) {
                hits += 1;
            }
        }
        hits as f64 / total as f64
    }

    #[test]
    fn test_empirical_fpr_tracks_theory() {
        for n in [1_000, 2_000, 4_000] {
            let filter = filled(n);
            let theory = calculate_fpr(CAPACITY, n, 3);
            let observed = empirical_fpr(&filter, (0..QUERIES).map(|i| format!("query_{}", i)));

            assert!(
                (observed - theory).abs() <= theory * 0.15,
                "n={}: observed FPR {} too far from theoretical {}",
                n,
                observed,
                theory
            );
            assert!((filter.false_positive_rate() - theory).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_queries_fpr_bounded() {
        let n = 1_000;
        let filter = filled(n);
        let theory = calculate_fpr(CAPACITY, n, 3);

        let mut rng = StdRng::seed_from_u64(0x5EED);
        let queries = (0..QUERIES).map(|_| {
            let len = rng.gen_range(8..32);
            let body: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            // Prefix keeps queries disjoint from the inserted "member_" keys
            format!("random:{}", body)
        });
        let queries: Vec<String> = queries.collect();

        let observed = empirical_fpr(&filter, queries);
        assert!(
            observed <= theory * 1.3 && observed >= theory * 0.7,
            "observed FPR {} outside tolerance of theoretical {}",
            observed,
            theory
        );
    }

    #[test]
    fn test_fill_based_fpr_matches_fill_ratio() {
        let filter = filled(2_000);
        let stats = filter.stats();

        let observed = empirical_fpr(&filter, (0..QUERIES).map(|i| format!("query_{}", i)));

        assert!(
            (observed - stats.fill_based_fpr).abs() <= stats.fill_based_fpr * 0.1,
            "observed {} vs fill-ratio estimate {}",
            observed,
            stats.fill_based_fpr
        );
    }

    #[test]
    fn test_fpr_increases_with_load() {
        let rates: Vec<f64> = [500, 1_000, 2_000, 4_000]
            .into_iter()
            .map(|n| empirical_fpr(&filled(n), (0..10_000).map(|i| format!("query_{}", i))))
            .collect();

        for pair in rates.windows(2) {
            assert!(pair[0] <= pair[1], "FPR should not drop as load grows: {:?}", rates);
        }
    }
}
