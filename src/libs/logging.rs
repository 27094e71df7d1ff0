use super::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when debug mode is on but `RUST_LOG` is not set.
const DEFAULT_DIRECTIVES: &str = "todo_suite=debug";

/// Installs the stderr subscriber when debug mode is on. Without it, the
/// message macros print straight to the console and tracing events are dropped.
pub fn init_tracing() -> anyhow::Result<()> {
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}
