use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory for persisted fixture data
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Address the query endpoint listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// Minutes between background refresh sweeps
    #[arg(long, default_value_t = 5)]
    pub refresh_minutes: u64,

    /// Days either side of today covered by each sweep
    #[arg(long, default_value_t = 4)]
    pub window_days: i64,

    /// Disable the background refresh scheduler
    #[arg(long)]
    pub no_refresh: bool,
}
