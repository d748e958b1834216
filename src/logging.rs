use crate::errors::{LoadError, LoadResult};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

pub const DEFAULT_FILTER: &str = "listings_loader=info";

/// Installs the global fmt subscriber. `RUST_LOG` overrides `default_filter`.
pub fn setup_logging(default_filter: &str) -> LoadResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(LoadError::Logging)
}
