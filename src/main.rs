use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use swapcalc::core::log::init_logging;
use swapcalc::core::{SumMethod, SwapInput};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for swapcalc::AppCommand {
    fn from(cmd: Commands) -> swapcalc::AppCommand {
        match cmd {
            Commands::Sum { n, method } => swapcalc::AppCommand::Sum { n, method },
            Commands::Prices => swapcalc::AppCommand::Prices,
            Commands::Convert { amount, from, to } => swapcalc::AppCommand::Convert(SwapInput {
                amount,
                from_currency: from,
                to_currency: to,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Sum the integers from 1 to N
    Sum {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Only evaluate with this method
        #[arg(short, long, value_enum)]
        method: Option<SumMethod>,
    },
    /// List the current price feed
    Prices,
    /// Convert an amount between two currencies
    Convert {
        amount: String,
        from: String,
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => swapcalc::cli::setup::run(cli.config_path.as_deref()).map(|_| ()),
        Some(cmd) => swapcalc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
