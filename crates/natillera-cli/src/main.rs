mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::contributions::ContributionArgs;
use commands::loans::LoanArgs;
use commands::mora::{DeadlineArgs, MoraArgs};
use commands::settlement::SettlementArgs;

/// Treasury calculations for a natillera savings association
#[derive(Parser)]
#[command(
    name = "natillera",
    version,
    about = "Treasury calculations for a natillera savings association",
    long_about = "A CLI for the calculations a natillera treasurer performs when \
                  recording contributions: due-date projection and late-fee \
                  suggestion, contribution receipt checks, loan summaries, and \
                  member liquidation statements."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a late fee for a contribution date
    Mora(MoraArgs),
    /// Project the most recent due date for a payment schedule
    Deadline(DeadlineArgs),
    /// Compute a contribution receipt and check the association minimum
    Contribution(ContributionArgs),
    /// Summarise a loan at a reference date
    Loan(LoanArgs),
    /// Liquidation statement for a member leaving the cycle
    Settlement(SettlementArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Mora(args) => commands::mora::run_mora(args),
        Commands::Deadline(args) => commands::mora::run_deadline(args),
        Commands::Contribution(args) => commands::contributions::run_contribution(args),
        Commands::Loan(args) => commands::loans::run_loan(args),
        Commands::Settlement(args) => commands::settlement::run_settlement(args),
        Commands::Version => {
            println!("natillera {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
