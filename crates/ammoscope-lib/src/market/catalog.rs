//! Market catalog loading and lookup.
//!
//! This module loads the static item table from CSV and implements the
//! [`MarketOracle`] on top of it: publicity answers come straight from the
//! `published` column, sort keys from market group, meta level and name.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Serialize;

use crate::error::{Error, Result};

use super::oracle::{ItemSortKey, MarketOracle};
use super::TypeId;

/// Minimum similarity for a catalog name to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Single market item row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInfo {
    pub type_id: TypeId,
    pub name: String,
    pub market_group_id: u32,
    pub meta_level: i32,
    /// Whether the item is publicly visible on the market.
    pub published: bool,
}

impl ItemInfo {
    /// Validate item data for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ItemDataValidation {
                message: format!("item {} has an empty name", self.type_id),
            });
        }
        if self.meta_level < 0 {
            return Err(Error::ItemDataValidation {
                message: format!(
                    "item '{}' has a negative meta_level: {}",
                    self.name, self.meta_level
                ),
            });
        }
        Ok(())
    }
}

/// Collection of item definitions loaded from a CSV table.
#[derive(Debug, Clone, Default)]
pub struct MarketCatalog {
    items: HashMap<TypeId, ItemInfo>,
    source: Option<PathBuf>,
}

impl MarketCatalog {
    /// Load a market catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a market catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ItemDataValidation {
                message: format!("failed to read market item headers: {err}"),
            })?
            .clone();

        // Helper to normalize header strings for robust matching.
        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };

        let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

        // Mapping of canonical field name -> possible header synonyms (normalized)
        let synonyms: &[(&str, &[&str])] = &[
            ("type_id", &["type_id", "typeid", "id", "item_id"]),
            ("name", &["name", "type_name", "item_name"]),
            (
                "market_group_id",
                &["market_group_id", "marketgroupid", "market_group", "group_id"],
            ),
            ("meta_level", &["meta_level", "metalevel", "meta"]),
            ("published", &["published", "public", "market_visible"]),
        ];

        use std::collections::BTreeMap;
        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();

        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize(alt);
                for (i, h) in normalized_headers.iter().enumerate() {
                    if h == &alt_n {
                        index_map.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let required: Vec<&str> = vec![
            "type_id",
            "name",
            "market_group_id",
            "meta_level",
            "published",
        ];
        let missing: Vec<&str> = required
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::ItemDataValidation {
                message: format!(
                    "market item table missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers
                        .iter()
                        .map(|h| h.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        let mut items = HashMap::new();

        let mut row_num: usize = 1; // header is typically line 1
        for result in csv_reader.records() {
            row_num += 1;
            let record = result.map_err(|e| Error::ItemDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
            };

            let name = get("name").unwrap_or_default();
            let type_id: TypeId = get("type_id")
                .ok_or_else(|| Error::ItemDataValidation {
                    message: format!("missing type_id for item '{}' at row {}", name, row_num),
                })?
                .parse::<TypeId>()
                .map_err(|e| Error::ItemDataValidation {
                    message: format!("invalid type_id for item '{}' at row {}: {}", name, row_num, e),
                })?;
            let market_group_id: u32 = get("market_group_id")
                .ok_or_else(|| Error::ItemDataValidation {
                    message: format!(
                        "missing market_group_id for item '{}' at row {}",
                        name, row_num
                    ),
                })?
                .parse::<u32>()
                .map_err(|e| Error::ItemDataValidation {
                    message: format!(
                        "invalid market_group_id for item '{}' at row {}: {}",
                        name, row_num, e
                    ),
                })?;
            let meta_level: i32 = get("meta_level")
                .ok_or_else(|| Error::ItemDataValidation {
                    message: format!("missing meta_level for item '{}' at row {}", name, row_num),
                })?
                .parse::<i32>()
                .map_err(|e| Error::ItemDataValidation {
                    message: format!(
                        "invalid meta_level for item '{}' at row {}: {}",
                        name, row_num, e
                    ),
                })?;
            let published = parse_flag(&get("published").ok_or_else(|| {
                Error::ItemDataValidation {
                    message: format!("missing published for item '{}' at row {}", name, row_num),
                }
            })?)
            .ok_or_else(|| Error::ItemDataValidation {
                message: format!(
                    "invalid published flag for item '{}' at row {}: expected true/false",
                    name, row_num
                ),
            })?;

            let item = ItemInfo {
                type_id,
                name: name.trim().to_string(),
                market_group_id,
                meta_level,
                published,
            };

            item.validate()?;

            if items.contains_key(&item.type_id) {
                return Err(Error::DuplicateItemId {
                    type_id: item.type_id,
                });
            }
            items.insert(item.type_id, item);
        }

        tracing::debug!("loaded market catalog with {} items", items.len());

        Ok(Self {
            items,
            source: None,
        })
    }

    /// Get an item by type id.
    pub fn get(&self, type_id: TypeId) -> Option<&ItemInfo> {
        self.items.get(&type_id)
    }

    /// Look up an item by name (case-insensitive).
    ///
    /// Unknown names return an error carrying fuzzy suggestions from the
    /// catalog.
    pub fn item_by_name(&self, name: &str) -> Result<&ItemInfo> {
        let needle = normalize_name(name);
        self.items
            .values()
            .find(|item| normalize_name(&item.name) == needle)
            .ok_or_else(|| Error::UnknownItem {
                name: name.to_string(),
                suggestions: self.fuzzy_item_matches(name, 3),
            })
    }

    /// Rank catalog names by similarity to `name`, best first.
    pub fn fuzzy_item_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .items
            .values()
            .map(|item| {
                (
                    strsim::jaro_winkler(&needle, &normalize_name(&item.name)),
                    item.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, n)| n.to_string())
            .collect()
    }

    /// Get all items sorted by name.
    pub fn items_sorted(&self) -> Vec<&ItemInfo> {
        let mut items: Vec<&ItemInfo> = self.items.values().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn classified(&self, type_id: TypeId) -> Result<&ItemInfo> {
        self.items
            .get(&type_id)
            .ok_or(Error::UnclassifiedItem { type_id })
    }
}

impl MarketOracle for MarketCatalog {
    fn is_published(&self, item: TypeId) -> Result<bool> {
        Ok(self.classified(item)?.published)
    }

    fn sort_key(&self, item: TypeId, reverse_market_group: bool) -> Result<ItemSortKey> {
        let info = self.classified(item)?;
        Ok(ItemSortKey::new(
            info.market_group_id,
            info.meta_level,
            info.name.clone(),
            info.type_id,
            reverse_market_group,
        ))
    }
}

/// Parse a boolean market flag ("true"/"false", "1"/"0", "yes"/"no").
fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Normalize an item name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
