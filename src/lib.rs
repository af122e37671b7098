//! # bomcalc - Deterministic Recursive Bill-of-Materials Resolver
//!
//! Given the inputs of a crafting recipe, `bomcalc` expands each input
//! through its own recipe, recursively, until only base materials are
//! left, and reports how much of each is needed:
//! - **Total**: never fails; broken recipe graphs degrade to "keep this item"
//! - **Deterministic**: same recipe data in the same order → same bill
//! - **Data-driven**: base items and blacklisted ingredients are configuration
//! - **Byproduct-aware**: surplus from multi-output recipes is reused
//!
//! ## Core Concepts
//!
//! ```text
//! [Recipe inputs] → [Decomposer] ⇄ [RecipeSource]
//!                        ↓
//!                 [BillOfMaterials]
//! ```
//!
//! 1. **ItemGroup**: one ingredient slot, with interchangeable alternatives
//! 2. **RecipeSource**: host-provided lookup of the recipes producing an item
//! 3. **Decomposer**: picks a recipe per ingredient and recurses
//! 4. **BillOfMaterials**: summed base ingredients, leftover byproducts and
//!    the expansion tree
//!
//! ## Example
//!
//! ```rust
//! use bomcalc::*;
//!
//! let slot = |item: &str| ItemGroup::single(ItemStack::new(item, 1));
//!
//! let mut book = RecipeBook::new();
//! book.add(Recipe::new(
//!     vec![slot("minecraft:iron_ore"), slot("minecraft:coal")],
//!     vec![slot("minecraft:iron_ingot")],
//! ));
//!
//! let pickaxe = Recipe::new(
//!     vec![
//!         slot("minecraft:iron_ingot"),
//!         slot("minecraft:iron_ingot"),
//!         slot("minecraft:iron_ingot"),
//!         slot("minecraft:stick"),
//!         slot("minecraft:stick"),
//!     ],
//!     vec![slot("minecraft:iron_pickaxe")],
//! );
//!
//! let bom = Decomposer::new(book).decompose_recipe(&pickaxe);
//! assert_eq!(bom.quantity_of(&"minecraft:iron_ore".into()), 3);
//! assert_eq!(bom.quantity_of(&"minecraft:coal".into()), 3);
//! assert_eq!(bom.quantity_of(&"minecraft:stick".into()), 2);
//! ```
//!
//! ## Modules
//!
//! - [`item_id`] - Item identifier type
//! - [`stack`] - Item stacks and ingredient matching
//! - [`group`] - Ingredient groups and quantity-summing merge
//! - [`recipe`] - Recipes and unit-conversion classification
//! - [`source`] - Recipe sources
//! - [`config`] - Base items and blacklist configuration
//! - [`select`] - Recipe selection
//! - [`ledger`] - Byproduct credit
//! - [`decomposer`] - Main resolver
//! - [`resolved`] - Decomposition results
//! - [`graph`] - Expansion tree
//! - [`error`] - Error types

pub mod config;
pub mod decomposer;
pub mod error;
pub mod graph;
pub mod group;
pub mod item_id;
pub mod ledger;
pub mod recipe;
pub mod resolved;
pub mod select;
pub mod source;
pub mod stack;

// Re-export main types for convenience
pub use config::{BlacklistEntry, DecomposerConfig, Rules};
pub use decomposer::{Decomposer, MAX_PATH_LEN};
pub use error::ConfigError;
pub use graph::{ExpansionTree, LeafReason, Outcome, TreeNode};
pub use group::{merge_all, merge_into, ItemGroup};
pub use item_id::ItemId;
pub use ledger::ByproductLedger;
pub use recipe::Recipe;
pub use resolved::BillOfMaterials;
pub use select::pick_recipe;
pub use source::{RecipeBook, RecipeSource};
pub use stack::{same_ignoring_size, ExactMatch, ItemStack, StackMatcher};
