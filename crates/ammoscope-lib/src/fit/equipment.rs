//! Equipment data structures for a ship fit.

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::market::TypeId;

/// Non-damage effects that still qualify equipment as an ammo alternative.
///
/// The broader effect taxonomy is open-ended; only these two are tracked
/// because webifying and painting represent a meaningful tactical choice
/// next to raw damage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TacticalEffect {
    StasisWebifier,
    TargetPainter,
}

/// A fitted weapon-like module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModule {
    /// Item identity; `None` for an empty slot entry.
    pub item: Option<TypeId>,
    /// Whether the module can deal damage.
    #[serde(default)]
    pub deals_damage: bool,
    /// Charges the module can load, before any market visibility filter.
    #[serde(default)]
    pub valid_charges: Vec<TypeId>,
}

/// A drone carried in the fit's drone bay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedDrone {
    /// Item identity; `None` for an unassigned bay entry.
    pub item: Option<TypeId>,
    /// State-independent damage capability. Drones are bay-loadable, so an
    /// inactive damage drone is still a valid ammo choice.
    #[serde(default)]
    pub deals_damage: bool,
    /// Current activation state. Qualification deliberately ignores it.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Recognized tactical effect tags carried by the drone's item.
    #[serde(default)]
    pub tactical_effects: BTreeSet<TacticalEffect>,
}

/// One ability of a fitted fighter squadron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterAbility {
    #[serde(default)]
    pub active: bool,
    /// Recognized effect of the ability; `None` for abilities outside the
    /// tracked taxonomy.
    #[serde(default)]
    pub effect: Option<TacticalEffect>,
}

/// A fighter squadron carried in the fit's fighter bay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedFighter {
    /// Item identity; `None` for an unassigned tube.
    pub item: Option<TypeId>,
    /// State-independent damage capability.
    #[serde(default)]
    pub deals_damage: bool,
    /// Abilities in declaration order.
    #[serde(default)]
    pub abilities: Vec<FighterAbility>,
}

/// The loadout under inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    pub name: String,
    #[serde(default)]
    pub modules: Vec<FittedModule>,
    #[serde(default)]
    pub drones: Vec<FittedDrone>,
    #[serde(default)]
    pub fighters: Vec<FittedFighter>,
}

impl Fit {
    /// Load a fit from a JSON document at a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a fit from a reader yielding a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let fit: Fit = serde_json::from_reader(reader)?;
        fit.validate()?;
        Ok(fit)
    }

    /// Validate fit data for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::FitDataValidation {
                message: "fit name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_fills_defaults() {
        let json = r#"{"name": "Bare", "modules": [{"item": 2410}]}"#;
        let fit = Fit::from_reader(json.as_bytes()).expect("parse");
        assert_eq!(fit.name, "Bare");
        assert_eq!(fit.modules.len(), 1);
        assert!(!fit.modules[0].deals_damage);
        assert!(fit.modules[0].valid_charges.is_empty());
        assert!(fit.drones.is_empty());
        assert!(fit.fighters.is_empty());
    }

    #[test]
    fn drones_default_to_active() {
        let json = r#"{"name": "Bay", "drones": [{"item": 3001, "deals_damage": true}]}"#;
        let fit = Fit::from_reader(json.as_bytes()).expect("parse");
        assert!(fit.drones[0].active);
    }

    #[test]
    fn empty_name_is_rejected() {
        let json = r#"{"name": "  "}"#;
        let err = Fit::from_reader(json.as_bytes()).expect_err("should reject");
        match err {
            Error::FitDataValidation { message } => assert!(message.contains("name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
