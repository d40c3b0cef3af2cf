use std::path::PathBuf;

use clap::Parser;

/// muse generation relay
#[derive(Debug, Parser)]
#[command(name = "muse", about = "Prompt-to-generation relay for hosted AI models")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "muse.toml", env = "MUSE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "MUSE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
