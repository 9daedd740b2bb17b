use crate::types::{ColorChoice, DisplayMode, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hubfeed")]
#[command(about = "Render GitHub activity events as a readable feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (defaults to the config file value, then plain)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (defaults to $HUBFEED_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Present a feed of events read from a file or stdin
    Render {
        /// JSON array of events; "-" or omitted reads stdin
        file: Option<PathBuf>,

        /// Reference time for relative timestamps (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<String>,

        #[arg(long)]
        mode: Option<DisplayMode>,

        /// Show at most N events
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        color: Option<ColorChoice>,
    },

    /// Show the resolved config path and effective settings
    Config,
}
