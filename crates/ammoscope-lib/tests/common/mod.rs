//! Common test utilities and fixture helpers.
//!
//! Provides a fake market oracle with query counting plus equipment
//! builders shared by the integration tests.

use std::cell::Cell;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use ammoscope_lib::error::{Error, Result};
use ammoscope_lib::fit::{
    FighterAbility, Fit, FittedDrone, FittedFighter, FittedModule, TacticalEffect,
};
use ammoscope_lib::market::{ItemSortKey, MarketOracle, TypeId};

/// Path to fixtures directory used by tests (market items, sample fits).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
struct FakeItem {
    name: String,
    market_group_id: u32,
    meta_level: i32,
    published: bool,
}

/// In-memory market oracle for tests.
///
/// Counts publicity queries so memoization behavior can be asserted.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeOracle {
    items: HashMap<TypeId, FakeItem>,
    publicity_queries: Cell<usize>,
}

#[allow(dead_code)]
impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a published item.
    pub fn with_item(mut self, type_id: TypeId, name: &str, market_group_id: u32) -> Self {
        self.items.insert(
            type_id,
            FakeItem {
                name: name.to_string(),
                market_group_id,
                meta_level: 0,
                published: true,
            },
        );
        self
    }

    /// Register an item hidden from the public market.
    pub fn with_unpublished(mut self, type_id: TypeId, name: &str, market_group_id: u32) -> Self {
        self.items.insert(
            type_id,
            FakeItem {
                name: name.to_string(),
                market_group_id,
                meta_level: 0,
                published: false,
            },
        );
        self
    }

    /// Number of `is_published` calls made against this oracle.
    pub fn publicity_queries(&self) -> usize {
        self.publicity_queries.get()
    }

    fn item(&self, type_id: TypeId) -> Result<&FakeItem> {
        self.items
            .get(&type_id)
            .ok_or(Error::UnclassifiedItem { type_id })
    }
}

impl MarketOracle for FakeOracle {
    fn is_published(&self, item: TypeId) -> Result<bool> {
        self.publicity_queries.set(self.publicity_queries.get() + 1);
        Ok(self.item(item)?.published)
    }

    fn sort_key(&self, item: TypeId, reverse_market_group: bool) -> Result<ItemSortKey> {
        let info = self.item(item)?;
        Ok(ItemSortKey::new(
            info.market_group_id,
            info.meta_level,
            info.name.clone(),
            item,
            reverse_market_group,
        ))
    }
}

/// Empty fit with the given name.
#[allow(dead_code)]
pub fn empty_fit(name: &str) -> Fit {
    Fit {
        name: name.to_string(),
        modules: Vec::new(),
        drones: Vec::new(),
        fighters: Vec::new(),
    }
}

/// Damage-dealing module with the given valid charges.
#[allow(dead_code)]
pub fn damage_module(item: TypeId, charges: &[TypeId]) -> FittedModule {
    FittedModule {
        item: Some(item),
        deals_damage: true,
        valid_charges: charges.to_vec(),
    }
}

/// Module that cannot deal damage.
#[allow(dead_code)]
pub fn utility_module(item: TypeId) -> FittedModule {
    FittedModule {
        item: Some(item),
        deals_damage: false,
        valid_charges: Vec::new(),
    }
}

/// Damage-capable drone with the given activation state.
#[allow(dead_code)]
pub fn damage_drone(item: TypeId, active: bool) -> FittedDrone {
    FittedDrone {
        item: Some(item),
        deals_damage: true,
        active,
        tactical_effects: BTreeSet::new(),
    }
}

/// Non-damage drone carrying the given tactical effects.
#[allow(dead_code)]
pub fn effect_drone(item: TypeId, effects: &[TacticalEffect]) -> FittedDrone {
    FittedDrone {
        item: Some(item),
        deals_damage: false,
        active: true,
        tactical_effects: effects.iter().copied().collect(),
    }
}

/// Non-damage drone with no tracked effects.
#[allow(dead_code)]
pub fn plain_drone(item: TypeId) -> FittedDrone {
    effect_drone(item, &[])
}

/// Damage-capable fighter with no abilities.
#[allow(dead_code)]
pub fn damage_fighter(item: TypeId) -> FittedFighter {
    FittedFighter {
        item: Some(item),
        deals_damage: true,
        abilities: Vec::new(),
    }
}

/// Non-damage fighter with the given abilities.
#[allow(dead_code)]
pub fn support_fighter(item: TypeId, abilities: Vec<FighterAbility>) -> FittedFighter {
    FittedFighter {
        item: Some(item),
        deals_damage: false,
        abilities,
    }
}

/// Fighter ability helper.
#[allow(dead_code)]
pub fn ability(active: bool, effect: Option<TacticalEffect>) -> FighterAbility {
    FighterAbility { active, effect }
}
