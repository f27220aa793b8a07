use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bridge_scan_config::config::{load_config, ScanConfig};

#[derive(Parser)]
#[command(name = "scan-config-cli")]
#[command(about = "Inspect and validate swap bridge scan config files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file
    Check { path: PathBuf },
    /// Print a validated config file
    Show {
        path: PathBuf,
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print a single pair, looked up case-insensitively
    Pair { path: PathBuf, pair_id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { path } => {
            let config = load_config(&path)?;
            println!("{}: OK ({} token pairs)", path.display(), config.len());
        }
        Commands::Show { path, json } => {
            let config = load_config(&path)?;
            print_config(&config, json)?;
        }
        Commands::Pair { path, pair_id } => {
            let config = load_config(&path)?;
            let token = config
                .find_pair(&pair_id)
                .ok_or_else(|| format!("pair '{}' not found", pair_id))?;
            println!("{}", serde_json::to_string_pretty(token)?);
        }
    }
    Ok(())
}

fn print_config(config: &ScanConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
