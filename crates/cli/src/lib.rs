pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "packwise",
    about = "Packwise operator CLI",
    long_about = "Estimate packaging specifications and costs, inspect reference tables, and review effective configuration.",
    after_help = "Examples:\n  packwise estimate --dimensions \"10x5x3\" --weight 5 --fragility 3 --quantity 100\n  packwise estimate --dimensions \"25x12x8 cm\" --weight 2kg --fragility 4 --quantity 250 --brief\n  packwise tables\n  packwise config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Calculate a packaging estimate from raw product strings")]
    Estimate {
        #[arg(long, help = "Product dimensions, e.g. \"10x5x3\" or \"25x12x8 cm\"")]
        dimensions: String,
        #[arg(long, help = "Product weight, e.g. \"5\", \"2kg\", \"16oz\"")]
        weight: String,
        #[arg(long, help = "Fragility level from 1 (sturdy) to 5 (very fragile)")]
        fragility: String,
        #[arg(long, help = "Order quantity")]
        quantity: String,
        #[arg(long, help = "Emit the plain-text analysis brief instead of JSON")]
        brief: bool,
    },
    #[command(about = "Dump the effective reference tables as structured JSON")]
    Tables,
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Estimate { dimensions, weight, fragility, quantity, brief } => {
            commands::estimate::run(&dimensions, &weight, &fragility, &quantity, brief)
        }
        Command::Tables => commands::tables::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
