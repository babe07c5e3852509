//! Items command handler for inspecting the market catalog.

use std::path::Path;

use anyhow::Result;

use ammoscope_lib::{ItemInfo, MarketCatalog};

use super::load_market_catalog;

/// Handle the items subcommand.
///
/// Lists the catalog, or with `--find` looks a single item up by name
/// (unknown names fail with fuzzy suggestions from the library).
pub fn handle_items(market_data: Option<&Path>, find: Option<&str>) -> Result<()> {
    let catalog = load_market_catalog(market_data)?;

    match find {
        Some(name) => {
            let item = catalog.item_by_name(name)?;
            print_item(item);
        }
        None => print_catalog(&catalog),
    }

    Ok(())
}

fn print_item(item: &ItemInfo) {
    println!("{} ({})", item.name, item.type_id);
    println!("  market group: {}", item.market_group_id);
    println!("  meta level:   {}", item.meta_level);
    println!("  published:    {}", item.published);
}

/// Print the market catalog to stdout in a formatted table.
fn print_catalog(catalog: &MarketCatalog) {
    let items = catalog.items_sorted();
    if items.is_empty() {
        println!("No items available in catalog.");
        return;
    }

    println!("Available items ({}):", items.len());
    println!(
        "{:<28} {:>8} {:>12} {:>6} {:>10}",
        "Name", "Type ID", "Market Group", "Meta", "Published"
    );
    for item in items {
        println!(
            "{:<28} {:>8} {:>12} {:>6} {:>10}",
            item.name, item.type_id, item.market_group_id, item.meta_level, item.published
        );
    }
}
