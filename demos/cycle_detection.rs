//! Cycle detection example: recipes that feed each other
//!
//! This example shows:
//! - What happens when two items are each made from the other
//! - How the expansion tree reports where and why it stopped

use bomcalc::*;
use tracing_subscriber::EnvFilter;

fn slot(item: &str) -> ItemGroup {
    ItemGroup::single(ItemStack::new(item, 1))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Setting up circular recipes ===\n");

    let mut book = RecipeBook::new();
    // ingot <- dust
    book.add(Recipe::new(vec![slot("mod:iron_dust")], vec![slot("mod:iron_ingot")]));
    println!("mod:iron_ingot <- mod:iron_dust");
    // dust <- ingot (a grinder)
    book.add(Recipe::new(vec![slot("mod:iron_ingot")], vec![slot("mod:iron_dust")]));
    println!("mod:iron_dust  <- mod:iron_ingot");

    let decomposer = Decomposer::with_rules(book, Rules::permissive());

    println!("\n=== Decomposing a gear made of 4 ingots ===\n");

    let gear = Recipe::new(vec![slot("mod:iron_ingot"); 4], vec![slot("mod:iron_gear")]);
    let bom = decomposer.decompose_recipe(&gear);

    for group in &bom.ingredients {
        println!("  {}", group);
    }

    println!(
        "\nStopped on reused ancestors: {}",
        bom.tree.count_leaves(LeafReason::ReusedAncestor)
    );
    println!("Stopped on exact cycles:     {}", bom.tree.count_leaves(LeafReason::Cycle));
    println!("Deepest level reached:       {}", bom.tree.depth());
}
