use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slotwise-cli", version, about = "Slotwise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Free-slot search on explicit busy intervals
    Slot {
        #[command(subcommand)]
        action: commands::slot::SlotAction,
    },
    /// Calendar-backed day planning
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Slot { action } => commands::slot::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
