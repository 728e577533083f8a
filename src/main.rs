use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ganfetch::commands;
use ganfetch::core::config::Config;
use ganfetch::Technique;

#[derive(Parser)]
#[clap(name = "ganfetch")]
#[clap(about = "Download CycleGAN and pix2pix datasets")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and unpack a dataset (prompts for one if --dataset is omitted)
    Get {
        /// Directory to unpack into (default: from config, else ./datasets)
        destination: Option<PathBuf>,
        /// Archive to download, including its extension (e.g., horse2zebra.zip)
        #[clap(short, long)]
        dataset: Option<String>,
        /// Dataset family: cyclegan or pix2pix
        #[clap(short, long)]
        technique: Option<Technique>,
        /// Only print the resulting path
        #[clap(short, long)]
        quiet: bool,
    },
    /// List the datasets available for a technique
    List {
        /// Dataset family: cyclegan or pix2pix
        #[clap(short, long)]
        technique: Option<Technique>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load().map_err(|e| anyhow::anyhow!(e))?;

    let result = match cli.command {
        Commands::Get {
            destination,
            dataset,
            technique,
            quiet,
        } => {
            let technique = technique
                .map(|t| t.name().to_string())
                .unwrap_or(config.technique);
            let destination = destination.unwrap_or(config.destination);
            commands::get::get_dataset(
                &technique,
                &destination,
                dataset.as_deref(),
                config.verbose && !quiet,
            )
            .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List { technique } => {
            let technique = technique
                .map(|t| t.name().to_string())
                .unwrap_or(config.technique);
            commands::list::list_datasets(&technique).map_err(|e| anyhow::anyhow!(e))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
