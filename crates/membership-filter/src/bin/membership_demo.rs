//! Small demonstration of the membership filter.
//!
//! Adds three book titles to a 50-bit filter, queries one member and one
//! non-member, then prints the filter statistics as JSON.
//!
//! Logging is configured with `MEMBERSHIP_LOG_LEVEL` (or `RUST_LOG`) and
//! `MEMBERSHIP_JSON_LOGS`.

use anyhow::Context;
use membership_filter::telemetry::{init_logging, LogConfig};
use membership_filter::{FilterConfigBuilder, MembershipFilter};
use tracing::info;

const BOOKS: [&str; 3] = ["1984", "Brave New World", "Fahrenheit 451"];

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env()).context("failed to initialise logging")?;

    let config = FilterConfigBuilder::new()
        .capacity(50)
        .hash_count(3)
        .build()?;
    let mut filter = MembershipFilter::from_config(&config)?;

    for title in BOOKS {
        filter.add(title);
        info!(title, indices = ?filter.compute_indices(title), "Added item");
    }

    for query in ["1984", "Dune"] {
        println!("{}: {}", query, filter.might_contain(query));
    }

    let stats = serde_json::to_string_pretty(&filter.stats())?;
    println!("{}", stats);

    Ok(())
}
