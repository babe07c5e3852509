//! Market oracle abstraction.
//!
//! The grouping and ordering logic depends on two external judgements:
//! whether an item is publicly visible on the market, and how items rank
//! against each other for display. Both are behind the [`MarketOracle`]
//! trait so the classifier can be driven by the real catalog or by a fake
//! in tests.

use std::cmp::Ordering;

use crate::error::Result;

use super::TypeId;

/// Total, deterministic sort key for an item.
///
/// Field order is precedence order: market group first, then meta level,
/// name, and finally the type id as an unconditional tie breaker. The
/// reversed-market-group form negates the market group component only;
/// meta level and name keep their natural direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemSortKey {
    market_group: i64,
    meta_level: i32,
    name: String,
    type_id: TypeId,
}

impl ItemSortKey {
    /// Build a sort key for an item.
    ///
    /// `reverse_market_group` flips the market-group precedence (and only
    /// that component), matching the reversed-group comparison the display
    /// layer asks for.
    pub fn new(
        market_group_id: u32,
        meta_level: i32,
        name: impl Into<String>,
        type_id: TypeId,
        reverse_market_group: bool,
    ) -> Self {
        let market_group = if reverse_market_group {
            -(i64::from(market_group_id))
        } else {
            i64::from(market_group_id)
        };
        Self {
            market_group,
            meta_level,
            name: name.into(),
            type_id,
        }
    }
}

/// Read-only market classification service.
///
/// Implementations must answer definitively for every item they are asked
/// about; an item outside the implementation's knowledge is an error, not
/// a default. Both methods are side-effect free and may be called
/// repeatedly.
pub trait MarketOracle {
    /// Whether the item is publicly visible on the market.
    fn is_published(&self, item: TypeId) -> Result<bool>;

    /// Total order key for the item.
    ///
    /// `reverse_market_group` requests reversed market-group precedence;
    /// the rest of the key keeps its natural direction.
    fn sort_key(&self, item: TypeId, reverse_market_group: bool) -> Result<ItemSortKey>;

    /// Compare two items under the oracle order.
    fn compare_items(
        &self,
        a: TypeId,
        b: TypeId,
        reverse_market_group: bool,
    ) -> Result<Ordering> {
        let key_a = self.sort_key(a, reverse_market_group)?;
        let key_b = self.sort_key(b, reverse_market_group)?;
        Ok(key_a.cmp(&key_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_orders_by_market_group_before_name() {
        let a = ItemSortKey::new(10, 0, "Zeta", 1, false);
        let b = ItemSortKey::new(20, 0, "Alpha", 2, false);
        assert!(a < b);
    }

    #[test]
    fn reversal_flips_market_group_only() {
        let a = ItemSortKey::new(10, 0, "Alpha", 1, true);
        let b = ItemSortKey::new(20, 0, "Zeta", 2, true);
        // Group 20 now ranks below group 10 ...
        assert!(b < a);

        // ... while same-group items still order by name ascending.
        let c = ItemSortKey::new(10, 0, "Alpha", 3, true);
        let d = ItemSortKey::new(10, 0, "Zeta", 4, true);
        assert!(c < d);
    }

    #[test]
    fn type_id_breaks_full_ties() {
        let a = ItemSortKey::new(10, 5, "Same", 1, false);
        let b = ItemSortKey::new(10, 5, "Same", 2, false);
        assert!(a < b);
        assert_ne!(a, b);
    }
}
