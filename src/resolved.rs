//! Decomposition results module.
//!
//! Contains `BillOfMaterials`, the full outcome of one decomposition:
//! the flattened base ingredients plus the breakdown needed to explain
//! them.

use crate::graph::ExpansionTree;
use crate::group::ItemGroup;
use crate::item_id::ItemId;

/// The result of decomposing one recipe.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{Decomposer, ItemGroup, ItemStack, RecipeBook};
///
/// let decomposer = Decomposer::new(RecipeBook::new());
/// let bom = decomposer.decompose(
///     &[ItemGroup::single(ItemStack::new("minecraft:cobblestone", 8))],
///     &ItemGroup::single(ItemStack::new("minecraft:furnace", 1)),
/// );
///
/// assert_eq!(bom.quantity_of(&"minecraft:cobblestone".into()), 8);
/// assert!(bom.leftovers.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BillOfMaterials {
    /// Base ingredients with their total quantities, in first-seen order.
    pub ingredients: Vec<ItemGroup>,

    /// Byproduct credit that nothing in the call consumed.
    pub leftovers: Vec<ItemGroup>,

    /// How each ingredient was reached.
    pub tree: ExpansionTree,
}

impl BillOfMaterials {
    /// Total quantity required of `item`, summed over every variant.
    pub fn quantity_of(&self, item: &ItemId) -> u64 {
        self.ingredients
            .iter()
            .filter_map(ItemGroup::primary)
            .filter(|s| &s.item == item)
            .map(|s| s.count)
            .sum()
    }

    /// Leftover credit of `item`.
    pub fn leftover_of(&self, item: &ItemId) -> u64 {
        self.leftovers
            .iter()
            .filter_map(ItemGroup::primary)
            .filter(|s| &s.item == item)
            .map(|s| s.count)
            .sum()
    }

    /// Returns `true` if nothing is required.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
