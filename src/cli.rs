use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "family-calendar")]
#[command(about = "Browse and edit the family calendar from the terminal")]
pub struct Cli {
    /// Base URL of the calendar server (overrides the config file)
    #[arg(short, long, env = "FAMILY_CALENDAR_SERVER")]
    pub server: Option<String>,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs; the terminal itself is used by the UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Ping the server's health endpoint and exit
    #[arg(long)]
    pub check: bool,
}
