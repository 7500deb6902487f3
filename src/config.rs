use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Minimal projects backend
#[derive(Parser, Debug, Clone)]
#[command(name = "project-backend")]
#[command(about = "In-memory users and projects HTTP backend")]
#[command(version)]
pub struct Config {
    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// An empty `PORT` counts as unset.
fn parse_port(value: &str) -> Result<u16, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    value
        .parse()
        .map_err(|e| format!("invalid port {value:?}: {e}"))
}
