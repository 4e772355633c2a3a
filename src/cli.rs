use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the system clock
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Select a day to list events for (defaults to today)
    #[clap(long)]
    pub select: Option<NaiveDate>,
}
