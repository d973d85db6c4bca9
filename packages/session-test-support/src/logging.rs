//! Test logging for the game-session crates.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Level directive for test runs: `TEST_LOG`, else `RUST_LOG`, else `warn`.
fn directive() -> String {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .unwrap_or_else(|| "warn".to_string())
}

/// Installs a test-captured, timestamp-free subscriber on first call.
///
/// Later calls do nothing, so every unit and integration test binary may call
/// it from a `ctor`.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let installed = fmt()
            .with_env_filter(EnvFilter::new(directive()))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
        // A subscriber installed elsewhere in the process wins.
        drop(installed);
    });
}
