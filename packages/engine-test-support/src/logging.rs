//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "warn";

/// Variables consulted for the filter, first match wins.
const FILTER_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];

fn env_filter() -> EnvFilter {
    FILTER_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a test subscriber once per process.
///
/// Set `TEST_LOG=texas42_engine=debug` to see every attempted action.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(env_filter())
            .with_test_writer()
            .without_time()
            .compact()
            .try_init()
            .ok();
    });
}
