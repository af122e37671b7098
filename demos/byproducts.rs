//! Byproduct example: surplus from multi-output recipes
//!
//! This example shows:
//! - Recipes producing more than one unit bank the surplus
//! - Later demand for the same item is served from that surplus
//! - Unused surplus is reported as leftovers

use bomcalc::*;
use tracing_subscriber::EnvFilter;

fn slot(item: &str, count: u64) -> ItemGroup {
    ItemGroup::single(ItemStack::new(item, count))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match DecomposerConfig::from_json(
        r#"{ "base_item_patterns": ["minecraft:stick"], "blacklist": [] }"#,
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bad configuration: {e}");
            return;
        }
    };
    let rules = match config.compile() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("bad configuration: {e}");
            return;
        }
    };

    let mut book = RecipeBook::new();
    // coal + stick -> 4 torches
    book.add(Recipe::new(
        vec![slot("minecraft:coal", 1), slot("minecraft:stick", 1)],
        vec![slot("minecraft:torch", 4)],
    ));

    let decomposer = Decomposer::with_rules(book, rules);

    println!("=== Six torches, one per slot ===\n");

    let inputs = vec![slot("minecraft:torch", 1); 6];
    let bom = decomposer.decompose(&inputs, &slot("minecraft:lantern_post", 1));

    println!("Base materials:");
    for group in &bom.ingredients {
        println!("  {}", group);
    }

    println!("\nLeftover byproducts:");
    for group in &bom.leftovers {
        println!("  {}", group);
    }

    println!("\nSlots covered by surplus: {}", bom.tree.count_credited());
}
