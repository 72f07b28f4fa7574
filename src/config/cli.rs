use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-page")]
#[command(about = "Render or serve a single-page portfolio site")]
pub struct CliConfig {
    /// Path to the TOML content file
    #[arg(short, long, default_value = "portfolio.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write the rendered page to an HTML file
    Render {
        #[arg(short, long, default_value = "index.html")]
        output: String,

        /// Experience tab selected initially
        #[arg(long, default_value = "0")]
        tab: usize,

        /// Date used for ongoing entries (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Serve the page over HTTP, rendering it on every request
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Log as JSON lines
        #[arg(long)]
        log_json: bool,
    },
    /// Validate the content file and report optional resources
    Check,
}
