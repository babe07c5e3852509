use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser, Debug)]
#[command(version, about = "Loadout ammo choice utilities")]
struct Cli {
    /// Override the market item table path.
    #[arg(long)]
    market_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the distinct ammo choices for a fit.
    Choices {
        /// Path to the fit JSON document.
        #[arg(long)]
        fit: PathBuf,
        /// Emit the choice board as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List market items, or look one up by name.
    Items {
        /// Item name to look up instead of listing everything.
        #[arg(long)]
        find: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Choices { fit, json } => {
            commands::choices::handle_choices(cli.market_data.as_deref(), &fit, json)
        }
        Command::Items { find } => {
            commands::items::handle_items(cli.market_data.as_deref(), find.as_deref())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
