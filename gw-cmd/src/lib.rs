//! Command implementations for the GamerWrapped CLI.
//!
//! Provides subcommands for printing a year's stats as text charts, listing
//! and downloading the server-rendered chart images, and an interactive
//! dashboard session driven from stdin.

use clap::Subcommand;
use gw_core::{ChartId, Config, Orientation, StatsClient, YearRange};

pub mod render;
pub mod report;
pub mod session;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a year's stats and print them as bar charts
    Stats {
        /// Year to show (defaults to 2024)
        #[arg(short, long)]
        year: Option<i32>,

        /// Second year to show next to the first
        #[arg(short, long)]
        compare: Option<i32>,

        /// Print the raw stats payload as JSON instead of charts
        #[arg(long)]
        json: bool,
    },

    /// List the chart image URLs of the export view
    Charts {
        #[arg(short, long)]
        year: Option<i32>,

        /// portrait or landscape
        #[arg(short, long, default_value = "portrait")]
        orientation: Orientation,
    },

    /// Download the chart images of a year as PNG files
    Download {
        #[arg(short, long)]
        year: Option<i32>,

        /// portrait or landscape
        #[arg(short, long, default_value = "portrait")]
        orientation: Orientation,

        /// Directory the images are written to
        #[arg(long, default_value = ".")]
        out_dir: String,

        /// Only these charts (games, consoles, platforms, series, status, months)
        #[arg(long = "chart")]
        charts: Vec<ChartId>,
    },

    /// Interactive dashboard: change years, compare and export from stdin
    Dashboard,
}

pub async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let client = StatsClient::new(&config);
    let years = YearRange::through_current_year();

    match command {
        Command::Stats {
            year,
            compare,
            json,
        } => report::run_stats(&client, years, year, compare, json).await,
        Command::Charts { year, orientation } => {
            report::run_charts(&client, years, year, orientation)
        }
        Command::Download {
            year,
            orientation,
            out_dir,
            charts,
        } => report::run_download(&client, years, year, orientation, &out_dir, &charts).await,
        Command::Dashboard => session::run_session(client, years).await,
    }
}
