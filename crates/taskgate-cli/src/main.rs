use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskgate", version, about = "Scheduled task gate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the rules once and run the task if permitted
    Run(commands::run::RunArgs),
    /// Rule document inspection
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Run log inspection
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Rules { action } => commands::rules::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Log { action } => commands::log::run(action),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
