//! Shared helpers for pcmd's integration tests.

pub mod builders;
pub mod fake_executor;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use pcmd::logging::LOG_ENV_VAR;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when neither `RUST_LOG` nor `PCMD_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "pcmd=debug";

/// Upper bound for any single test future; real commands finish well inside it.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Install a tracing subscriber that writes through the test harness, so
/// logs only show up for failing tests (or with `--nocapture`).
///
/// The filter comes from `RUST_LOG`, then `PCMD_LOG` (the variable the
/// binary reads), then [`DEFAULT_TEST_FILTER`].
pub fn init_tracing() {
    INIT.call_once(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

fn test_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .expect("test future exceeded TEST_TIMEOUT")
}
