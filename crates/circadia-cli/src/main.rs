use clap::{Parser, Subcommand};

mod commands;
mod storage;

#[derive(Parser)]
#[command(name = "circadia", version, about = "Circadia CLI -- daily energy forecasts and recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Circadian profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Menstrual cycle baseline management
    Cycle {
        #[command(subcommand)]
        action: commands::cycle::CycleAction,
    },
    /// Hourly energy estimates and 7-day forecast
    Energy {
        #[command(subcommand)]
        action: commands::energy::EnergyAction,
    },
    /// Activity and food recommendations
    Recommend {
        #[command(subcommand)]
        action: commands::recommend::RecommendAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Cycle { action } => commands::cycle::run(action),
        Commands::Energy { action } => commands::energy::run(action),
        Commands::Recommend { action } => commands::recommend::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
