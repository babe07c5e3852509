//! Ammoscope library entry points.
//!
//! This crate classifies a ship fit's damage-dealing equipment into the
//! distinct interchangeable ammo choices it offers: weapon modules grouped
//! by their exact set of market-visible charges, plus synthetic entries
//! for qualifying drones and fighters, in a deterministic display order.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod choices;
pub mod error;
pub mod fit;
pub mod market;
pub mod output;

pub use choices::{
    ammo_choices, module_groups, qualifying_drones, qualifying_fighters, AmmoChoice,
    ChargeSet, ItemCount, ModuleGroup,
};
pub use error::{Error, Result};
pub use fit::{FighterAbility, Fit, FittedDrone, FittedFighter, FittedModule, TacticalEffect};
pub use market::{ItemInfo, ItemSortKey, MarketCatalog, MarketOracle, TypeId};
pub use output::{ChoiceBoardSummary, ChoiceRow};
