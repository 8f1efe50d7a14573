use clap::Parser;
use std::net::SocketAddr;

/// Command line / environment configuration for the page server.
#[derive(Debug, Clone, Parser)]
#[command(name = "competition-server", about = "Serves the Uniswap trading competition landing page")]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long, env = "COMPETITION_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// tracing filter directive, e.g. `info` or `competition_server=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}
