// Shared helpers for integration tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_LOGGING: Once = Once::new();

/// Install a global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn` so rotations stay quiet unless
/// asked for (`RUST_LOG=wordcheck_avl=trace`).
pub fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
