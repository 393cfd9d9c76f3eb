//! Command line flags

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// ShelterConnect API server
#[derive(Debug, Default, Parser)]
#[command(name = "shelterconnect-server", version, about)]
pub struct Cli {
    /// YAML configuration file (default: config/shelterconnect.yaml, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on, overrides `server.bind_addr`
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Database URL, overrides `database.url`
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Logo upload directory, overrides `shelter_service.upload_dir`
    #[arg(long, value_name = "DIR")]
    pub upload_dir: Option<PathBuf>,
}
