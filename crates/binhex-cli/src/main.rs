use anyhow::Result;
use binhex_core::{echo_line, run_conversion, run_extraction, RunConfig};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "binhex",
    author,
    version = "0.1.0",
    about = "Rewrites 8-bit binary literals (0b00001010) as hex literals (0x0a)"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(help = "Input file; converted lines are written to <INPUT>.out")]
    input: Option<PathBuf>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the alphanumeric token following the first one on each line
    Alnum {
        #[clap(help = "Input file to scan")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries converted lines
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    match cli.command {
        Some(Commands::Alnum { input }) => {
            log::info!("Extracting alphanumeric tokens from: {}", input.display());
            run_extraction(&input, |token| println!("{}", token))?;
        }
        None => {
            let config = RunConfig::from_arg(cli.input)?;
            log::info!("Converting binary literals in: {}", config.input.display());
            let summary = run_conversion(&config, echo_line)?;
            log::info!(
                "Wrote {} lines ({} converted) to {}",
                summary.lines,
                summary.converted,
                config.output.display()
            );
        }
    }

    Ok(())
}
