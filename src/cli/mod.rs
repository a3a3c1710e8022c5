//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod serve;
pub mod simulate;

use clap::{Parser, Subcommand};

/// Simulated lightning feed and airport proximity report
#[derive(Parser)]
#[command(name = "strike-watch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Print one simulated strike batch, or its report
    Simulate(simulate::SimulateArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Simulate(args) => simulate::run(args),
    }
}
