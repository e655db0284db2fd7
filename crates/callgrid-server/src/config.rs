//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

const DEFAULT_PORT: u16 = 3001;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "callgrid-server",
    version,
    about = "HTTP API for booking onboarding and weekly follow-up calls"
)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "CALLGRID_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with an empty client directory instead of the demo roster
    #[arg(long, env = "CALLGRID_NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
