mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vetfinder-cli")]
#[command(about = "Find open emergency vet clinics near a US zip code")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for open emergency vet clinics and print them best first
    Search {
        /// US zip code to search around
        #[arg(long)]
        zip_code: String,

        /// Search radius in miles (defaults to 5)
        #[arg(long)]
        radius: Option<f64>,

        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = vetfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi_logs())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            zip_code,
            radius,
            json,
        }) => search::run_search(&config, &zip_code, radius, json).await?,
        None => println!("vetfinder-cli: run `vetfinder-cli search --zip-code <ZIP>`"),
    }

    Ok(())
}
