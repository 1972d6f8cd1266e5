use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod log;

pub(crate) use log::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "reflect-server", version)]
/// Query the sample dogs and cats with GraphQL
pub(crate) struct Args {
    /// IP address on which the server will listen for incoming connections
    #[arg(short, long, env = "REFLECT_LISTEN_ADDRESS", default_value = "127.0.0.1:8000")]
    pub listen_address: SocketAddr,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "REFLECT_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "REFLECT_LOG", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::new(self.log_level.as_filter_str())
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
