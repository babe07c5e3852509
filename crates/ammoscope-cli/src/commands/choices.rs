//! Choices command handler: the ammo choice board for a fit.

use std::path::Path;

use anyhow::{Context, Result};

use ammoscope_lib::{ammo_choices, ChoiceBoardSummary, Fit};

use super::load_market_catalog;

/// Handle the choices subcommand.
///
/// Loads the fit and the market catalog, classifies the fit's equipment
/// and prints one selectable row per choice, first row marked as the
/// default selection.
pub fn handle_choices(market_data: Option<&Path>, fit_path: &Path, json: bool) -> Result<()> {
    let catalog = load_market_catalog(market_data)?;
    let fit = Fit::from_path(fit_path)
        .with_context(|| format!("failed to load fit from {}", fit_path.display()))?;

    let choices = ammo_choices(Some(&fit), &catalog)
        .with_context(|| format!("failed to classify ammo choices for '{}'", fit.name))?;
    tracing::debug!("classified {} choice rows for '{}'", choices.len(), fit.name);

    let summary = ChoiceBoardSummary::from_choices(fit.name.clone(), &catalog, &choices);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_plain_text());
    }

    Ok(())
}
