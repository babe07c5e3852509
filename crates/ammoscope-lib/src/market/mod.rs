//! Market classification for inventory items.
//!
//! This module is organized into focused submodules:
//!
//! - [`oracle`] - The [`MarketOracle`] abstraction: item publicity and a
//!   total, deterministic item order used for display sorting
//! - [`catalog`] - CSV-backed item table implementing the oracle
//!
//! The classifier core never consults market data through globals; an
//! oracle is always passed in explicitly so it can be replaced by a fake
//! in tests.

pub mod catalog;
pub mod oracle;

/// Numeric identifier for an inventory type.
pub type TypeId = u32;

pub use catalog::{ItemInfo, MarketCatalog};
pub use oracle::{ItemSortKey, MarketOracle};
