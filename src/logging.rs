use std::sync::Once;

use env_logger::{Builder, Env};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "math_quiz=info";

/// Initialise stderr logging once; later calls are no-ops.
pub fn setup_log() {
    INIT.call_once(|| {
        Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
            .format_timestamp_millis()
            .init();
    });
}
