//! Basic example: bill of materials for an iron pickaxe
//!
//! This example shows:
//! - Building a recipe book
//! - Decomposing a recipe into base materials
//! - Reading the totals and the expansion tree
//!
//! Run with `RUST_LOG=bomcalc=trace` to see every decision.

use bomcalc::*;
use tracing_subscriber::EnvFilter;

fn slot(item: &str, count: u64) -> ItemGroup {
    ItemGroup::single(ItemStack::new(item, count))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut book = RecipeBook::new();

    // 1 log -> 4 planks
    book.add(Recipe::new(
        vec![slot("minecraft:log", 1)],
        vec![slot("minecraft:planks", 4)],
    ));
    // 2 planks -> 4 sticks
    book.add(Recipe::new(
        vec![slot("minecraft:planks", 1), slot("minecraft:planks", 1)],
        vec![slot("minecraft:stick", 4)],
    ));
    // iron ore + coal -> iron ingot
    book.add(Recipe::new(
        vec![slot("minecraft:iron_ore", 1), slot("minecraft:coal", 1)],
        vec![slot("minecraft:iron_ingot", 1)],
    ));
    // iron block -> 9 iron ingots (skipped: unit conversion)
    book.add(Recipe::new(
        vec![slot("minecraft:iron_block", 1)],
        vec![slot("minecraft:iron_ingot", 9)],
    ));

    let pickaxe = Recipe::new(
        vec![
            slot("minecraft:iron_ingot", 1),
            slot("minecraft:iron_ingot", 1),
            slot("minecraft:iron_ingot", 1),
            ItemGroup::empty(),
            slot("minecraft:stick", 1),
            ItemGroup::empty(),
            ItemGroup::empty(),
            slot("minecraft:stick", 1),
            ItemGroup::empty(),
        ],
        vec![slot("minecraft:iron_pickaxe", 1)],
    );

    let decomposer = Decomposer::new(book);
    let bom = decomposer.decompose_recipe(&pickaxe);

    println!("=== Base materials for an iron pickaxe ===\n");
    for group in &bom.ingredients {
        println!("  {}", group);
    }

    println!("\n=== Expansion tree ===\n");
    for (depth, node) in bom.tree.walk() {
        let note = match node.outcome {
            Outcome::Root => String::from("crafted"),
            Outcome::Expanded => String::from("expanded"),
            Outcome::Credited => String::from("from byproducts"),
            Outcome::Leaf(reason) => reason.to_string(),
        };
        println!("{}{} [{}]", "  ".repeat(depth), node.group, note);
    }
}
