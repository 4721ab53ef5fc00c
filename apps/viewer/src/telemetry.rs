use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs the global structured-logging subscriber.
///
/// `RUST_LOG` in the environment wins; otherwise the crate logs at the level
/// configured in `Config::rust_log`. Returns an error if a subscriber is already set.
pub fn init(config: &Config) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
