//! Tracing subscriber setup.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use wordfinder_config::LoggingConfig;

/// Install a fmt subscriber filtered by `RUST_LOG` plus the configured
/// level for the word finder crates.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(config: &LoggingConfig) {
    let directive = format!("wordfinder={}", config.level.as_str());
    let filter = match directive.parse::<Directive>() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
