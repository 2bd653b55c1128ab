use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Demos and test harnesses call
/// this; library consumers usually bring their own subscriber, so repeat
/// calls are a no-op.
pub fn init() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    });
}
