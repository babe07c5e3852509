// Module exports for CLI subcommands.
//
// Each module handles a specific subcommand; main.rs stays focused on
// parsing and dispatch.

pub mod choices;
pub mod items;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ammoscope_lib::MarketCatalog;

/// Load the market catalog for a command.
///
/// Searches for the item table in the following order:
/// 1. The `--market-data` flag
/// 2. The `AMMOSCOPE_MARKET_DATA` environment variable
/// 3. The debug fixture path (only in debug builds)
pub fn load_market_catalog(flag: Option<&Path>) -> Result<MarketCatalog> {
    let candidates = market_data_candidates(flag);
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "market item table not found; pass --market-data or set AMMOSCOPE_MARKET_DATA"
            )
        })?;

    MarketCatalog::from_path(&path)
        .with_context(|| format!("failed to load market items from {}", path.display()))
}

/// Candidate paths for the market item table.
fn market_data_candidates(flag: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(flag_path) = flag {
        candidates.push(flag_path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("AMMOSCOPE_MARKET_DATA") {
        candidates.push(PathBuf::from(env_path));
    }

    if cfg!(debug_assertions) {
        let fixture =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/market_items.csv");
        candidates.push(fixture);
    }

    candidates
}
