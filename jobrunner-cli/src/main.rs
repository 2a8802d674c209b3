use clap::{Parser, Subcommand};
use color_eyre::Result;

mod commands;
mod output;

use commands::{clean, setup, show};

/// Generate hierarchical batch-job submission artifacts
#[derive(Parser, Debug)]
#[command(name = "jobrunner", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate job.setup, job.input, job.target and job.submit
    Setup(setup::SetupArgs),
    /// Remove generated and transient files from a node directory
    Clean(clean::CleanArgs),
    /// Print the resolved job configuration without writing anything
    Show(show::ShowArgs),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Setup(args) => setup::execute(args),
        Command::Clean(args) => clean::execute(args),
        Command::Show(args) => show::execute(args),
    }
}
