//! Command line and environment configuration.
//!
//! Every flag can also be set through an `ITEMS_API_*` environment
//! variable; flags win over the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};

pub const DEFAULT_PORT: u16 = 8080;

/// Serve the Items CRUD API.
#[derive(Debug, Clone, Parser)]
#[command(name = "items-api", version)]
#[command(about = "Serve the Items CRUD API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ITEMS_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "ITEMS_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with two sample items instead of an empty store
    #[arg(long, env = "ITEMS_API_SEED", default_value_t = false)]
    pub seed: bool,

    /// Log output format
    #[arg(long, env = "ITEMS_API_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            seed: false,
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per event
    Json,
}
