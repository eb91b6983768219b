mod commands;
mod config;
mod error;
mod feed;
mod fetch;
mod render;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::commands::run_command;

/// Command-line arguments for rss-reader
#[derive(Parser, Debug)]
#[command(name = "rss-reader", version)]
#[command(about = "Command-line RSS reader: print a feed as text or JSON")]
pub struct Cli {
    /// RSS feed URL
    pub source: Option<String>,

    /// Print result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Only show the first N items (overrides config)
    #[arg(
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: Option<usize>,
}

fn main() -> ExitCode {
    // logs go to stderr, stdout carries the feed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = config::load_config().and_then(|cfg| run_command(cli, &cfg));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
