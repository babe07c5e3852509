//! Structured presentation output for ammo choice lists.
//!
//! Converts the ordered [`AmmoChoice`](crate::choices::AmmoChoice) entries
//! into rows with resolved item names, ready for a renderer to show as
//! mutually-exclusive options. The first row is always marked as the
//! initial selection.

use std::fmt::Write;

use serde::Serialize;

use crate::choices::AmmoChoice;
use crate::market::MarketCatalog;

/// One selectable row of the choice board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoiceRow {
    pub index: usize,
    pub label: String,
    /// Whether this row is the initial default selection.
    pub selected: bool,
}

/// Structured representation of a fit's choice board that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoiceBoardSummary {
    pub fit: String,
    pub rows: Vec<ChoiceRow>,
}

impl ChoiceBoardSummary {
    /// Build a summary from an ordered choice list, resolving item names
    /// against the catalog.
    ///
    /// The first generated row is marked selected regardless of whether it
    /// is a module group or a synthetic entry.
    pub fn from_choices(
        fit_name: impl Into<String>,
        catalog: &MarketCatalog,
        choices: &[AmmoChoice],
    ) -> Self {
        let rows = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| ChoiceRow {
                index,
                label: choice_label(catalog, choice),
                selected: index == 0,
            })
            .collect();
        Self {
            fit: fit_name.into(),
            rows,
        }
    }

    /// Render the board as terminal text, one row per line.
    pub fn render_plain_text(&self) -> String {
        let mut out = String::new();
        if self.rows.is_empty() {
            let _ = writeln!(out, "No ammo choices for {}.", self.fit);
            return out;
        }
        let _ = writeln!(out, "Ammo choices for {} ({}):", self.fit, self.rows.len());
        for row in &self.rows {
            let marker = if row.selected { "(*)" } else { "( )" };
            let _ = writeln!(out, "{} {}", marker, row.label);
        }
        out
    }
}

/// Label for a single choice entry.
///
/// Module groups render their item multiplicities ("2x Light Missile
/// Launcher I"); the synthetic entries use their literal names.
fn choice_label(catalog: &MarketCatalog, choice: &AmmoChoice) -> String {
    match choice {
        AmmoChoice::ModuleGroup(group) => group
            .items
            .iter()
            .map(|ic| {
                let name = catalog
                    .get(ic.item)
                    .map(|info| info.name.as_str())
                    .unwrap_or("<unknown>");
                format!("{}x {}", ic.count, name)
            })
            .collect::<Vec<_>>()
            .join(" + "),
        AmmoChoice::Drones => "Drones".to_string(),
        AmmoChoice::Fighters => "Fighters".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{ChargeSet, ItemCount, ModuleGroup};

    fn catalog() -> MarketCatalog {
        let csv = "type_id,name,market_group_id,meta_level,published\n\
                   2410,Light Missile Launcher I,640,0,true\n";
        MarketCatalog::from_reader(csv.as_bytes()).expect("inline catalog parses")
    }

    #[test]
    fn first_row_is_selected() {
        let choices = vec![
            AmmoChoice::ModuleGroup(ModuleGroup {
                items: vec![ItemCount {
                    item: 2410,
                    count: 2,
                }],
                charges: ChargeSet::new([209, 210]),
            }),
            AmmoChoice::Drones,
        ];
        let summary = ChoiceBoardSummary::from_choices("Alpha", &catalog(), &choices);
        assert_eq!(summary.rows.len(), 2);
        assert!(summary.rows[0].selected);
        assert!(!summary.rows[1].selected);
        assert_eq!(summary.rows[0].label, "2x Light Missile Launcher I");
        assert_eq!(summary.rows[1].label, "Drones");
    }

    #[test]
    fn unknown_item_falls_back_in_display_only() {
        let choices = vec![AmmoChoice::ModuleGroup(ModuleGroup {
            items: vec![ItemCount { item: 99, count: 1 }],
            charges: ChargeSet::new([209]),
        })];
        let summary = ChoiceBoardSummary::from_choices("Alpha", &catalog(), &choices);
        assert_eq!(summary.rows[0].label, "1x <unknown>");
    }

    #[test]
    fn empty_board_renders_a_notice() {
        let summary = ChoiceBoardSummary::from_choices("Alpha", &catalog(), &[]);
        assert!(summary.render_plain_text().contains("No ammo choices"));
    }
}
