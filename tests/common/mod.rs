
use std::sync::Once;

static INIT: Once = Once::new();

/// Route tracing output through the test harness. RUST_LOG controls the
/// filter as usual.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
