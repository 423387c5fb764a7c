//! Logging initialization
//!
//! Console-only tracing setup with `RUST_LOG` override support. Verbose
//! HTTP-client internals are capped below the application log level.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the tracing subscriber for console output.
///
/// The default level is `info`; set `RUST_LOG` to override, e.g.
/// `RUST_LOG="debug,reqwest=debug"` to see request-level detail.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("h2=warn".parse().unwrap())
    });

    let console_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false);

    Registry::default().with(env_filter).with(console_layer).init();

    Ok(())
}
