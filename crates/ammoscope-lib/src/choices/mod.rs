//! Loadout ammo classification.
//!
//! This module computes, for a given fit, the distinct interchangeable
//! ammo choices across its damage-dealing equipment:
//!
//! - [`module_groups`] - weapon modules partitioned by their exact set of
//!   market-visible charges, with per-group item multiplicities
//! - [`qualifying_drones`] / [`qualifying_fighters`] - drones and fighters
//!   that stand in as ammo alternatives
//! - [`ammo_choices`] - the combined, deterministically ordered choice
//!   list handed to the presentation layer
//!
//! Market visibility and item ordering come from an injected
//! [`MarketOracle`](crate::market::MarketOracle); the computation is a
//! pure function of the fit and the oracle's answers.
//!
//! # Example
//!
//! ```no_run
//! use ammoscope_lib::choices::ammo_choices;
//! use ammoscope_lib::fit::Fit;
//! use ammoscope_lib::market::MarketCatalog;
//!
//! let catalog = MarketCatalog::from_path(std::path::Path::new("market_items.csv")).unwrap();
//! let fit = Fit::from_path(std::path::Path::new("alpha_fit.json")).unwrap();
//! for choice in ammo_choices(Some(&fit), &catalog).unwrap() {
//!     println!("{:?}", choice);
//! }
//! ```

mod charge_set;
mod classify;

pub use charge_set::ChargeSet;
pub use classify::{module_groups, qualifying_drones, qualifying_fighters};

use serde::Serialize;

use crate::error::Result;
use crate::fit::Fit;
use crate::market::{MarketOracle, TypeId};

/// Distinct module item with the number of fitted instances sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    pub item: TypeId,
    pub count: u32,
}

/// One display group of modules sharing an identical visible-charge set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleGroup {
    /// Distinct module items with multiplicities, highest oracle order
    /// first.
    pub items: Vec<ItemCount>,
    /// The exact visible-charge set shared by every module in the group.
    pub charges: ChargeSet,
}

/// One entry of the ordered, mutually-exclusive choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmmoChoice {
    /// A group of weapon modules sharing a charge set.
    ModuleGroup(ModuleGroup),
    /// Synthetic entry standing for all qualifying drones.
    Drones,
    /// Synthetic entry standing for all qualifying fighters.
    Fighters,
}

/// Assemble the full ordered choice list for a fit.
///
/// Module groups come first in their computed order, followed by one
/// synthetic `Drones` entry when any drone qualifies and one synthetic
/// `Fighters` entry when any fighter qualifies. The renderer maps each
/// entry to one selectable row.
pub fn ammo_choices(
    fit: Option<&Fit>,
    oracle: &dyn MarketOracle,
) -> Result<Vec<AmmoChoice>> {
    let mut rows: Vec<AmmoChoice> = module_groups(fit, oracle)?
        .into_iter()
        .map(AmmoChoice::ModuleGroup)
        .collect();
    if !qualifying_drones(fit).is_empty() {
        rows.push(AmmoChoice::Drones);
    }
    if !qualifying_fighters(fit).is_empty() {
        rows.push(AmmoChoice::Fighters);
    }
    Ok(rows)
}
