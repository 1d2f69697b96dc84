//! Entry point for the Call Cost Engine binary.
//!
//! Running this binary starts an HTTP server that exposes the
//! projection engine.  The bind address is taken from
//! `CALLCOST_BIND_ADDR` and the log filter from `CALLCOST_LOG` (or
//! `RUST_LOG`); see [`callcost_engine::config`] for defaults.

use anyhow::Context;
use callcost_engine::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    callcost_engine::api::serve(&config)
        .await
        .context("server terminated with an error")
}
