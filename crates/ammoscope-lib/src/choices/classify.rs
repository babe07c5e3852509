//! Equipment classification: module grouping and drone/fighter
//! qualification.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::Result;
use crate::fit::{Fit, FittedDrone, FittedFighter, TacticalEffect};
use crate::market::{MarketOracle, TypeId};

use super::charge_set::ChargeSet;
use super::{ItemCount, ModuleGroup};

/// Partition the fit's damage-dealing modules into display groups keyed by
/// their exact set of market-visible charges.
///
/// Modules with no assigned item, no damage capability, or an empty
/// visible-charge set contribute to no group. Identical items fitted more
/// than once collapse into one entry with a multiplicity count. Within a
/// group, items are ordered by the oracle's reversed-market-group order,
/// highest first; groups themselves are ordered by their first item under
/// the same comparison.
pub fn module_groups(
    fit: Option<&Fit>,
    oracle: &dyn MarketOracle,
) -> Result<Vec<ModuleGroup>> {
    let Some(fit) = fit else {
        return Ok(Vec::new());
    };

    // Visible-charge sets are memoized per distinct module item so repeated
    // fittings of the same item query the oracle once.
    let mut visible_charges: HashMap<TypeId, ChargeSet> = HashMap::new();
    let mut accumulated: HashMap<ChargeSet, HashMap<TypeId, u32>> = HashMap::new();

    for module in &fit.modules {
        let Some(type_id) = module.item else {
            continue;
        };
        if !module.deals_damage {
            continue;
        }
        let charges = match visible_charges.entry(type_id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut visible = Vec::with_capacity(module.valid_charges.len());
                for &charge in &module.valid_charges {
                    if oracle.is_published(charge)? {
                        visible.push(charge);
                    }
                }
                entry.insert(ChargeSet::new(visible))
            }
        };
        // Modules which can load no visible charge offer no choice.
        if charges.is_empty() {
            continue;
        }
        *accumulated
            .entry(charges.clone())
            .or_default()
            .entry(type_id)
            .or_insert(0) += 1;
    }

    // Resolve oracle keys up front, then order items within each group and
    // the groups themselves, highest key first.
    let mut keyed: Vec<(crate::market::ItemSortKey, ModuleGroup)> =
        Vec::with_capacity(accumulated.len());
    for (charges, counts) in accumulated {
        let mut items = Vec::with_capacity(counts.len());
        for (item, count) in counts {
            let key = oracle.sort_key(item, true)?;
            items.push((key, ItemCount { item, count }));
        }
        items.sort_by(|a, b| b.0.cmp(&a.0));
        let lead_key = items[0].0.clone();
        keyed.push((
            lead_key,
            ModuleGroup {
                items: items.into_iter().map(|(_, ic)| ic).collect(),
                charges,
            },
        ));
    }
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(
        "grouped {} fitted modules into {} charge-set groups",
        fit.modules.len(),
        keyed.len()
    );

    Ok(keyed.into_iter().map(|(_, group)| group).collect())
}

/// Drones that qualify as an ammo alternative.
///
/// Membership-only contract: callers decide whether to show a single
/// synthetic "Drones" choice based on non-emptiness. Returned in fit
/// order.
pub fn qualifying_drones(fit: Option<&Fit>) -> Vec<&FittedDrone> {
    let Some(fit) = fit else {
        return Vec::new();
    };
    fit.drones.iter().filter(|d| drone_qualifies(d)).collect()
}

fn drone_qualifies(drone: &FittedDrone) -> bool {
    if drone.item.is_none() {
        return false;
    }
    // Drones are bay-loadable, so damage capability counts even while the
    // drone is inactive.
    if drone.deals_damage {
        return true;
    }
    drone.tactical_effects.contains(&TacticalEffect::StasisWebifier)
        || drone.tactical_effects.contains(&TacticalEffect::TargetPainter)
}

/// Fighters that qualify as an ammo alternative.
///
/// Same membership-only contract as [`qualifying_drones`].
pub fn qualifying_fighters(fit: Option<&Fit>) -> Vec<&FittedFighter> {
    let Some(fit) = fit else {
        return Vec::new();
    };
    fit.fighters
        .iter()
        .filter(|f| fighter_qualifies(f))
        .collect()
}

fn fighter_qualifies(fighter: &FittedFighter) -> bool {
    if fighter.item.is_none() {
        return false;
    }
    if fighter.deals_damage {
        return true;
    }
    // Scan abilities in order; the first active webifier settles it.
    fighter
        .abilities
        .iter()
        .any(|a| a.active && a.effect == Some(TacticalEffect::StasisWebifier))
}
