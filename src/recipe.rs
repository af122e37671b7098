//! Recipes and unit-conversion classification.
//!
//! Recipes are supplied by the host. Only the first output slot matters
//! to the decomposer: its primary stack names what the recipe makes and
//! how many per craft.

use crate::group::ItemGroup;
use crate::stack::{same_ignoring_size, ItemStack, StackMatcher};
use serde::{Deserialize, Serialize};

/// Number of units packed into a block (and of nuggets in a unit).
const COMPRESSION_FACTOR: u64 = 9;

/// A crafting recipe: ordered input slots and ordered output slots.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ItemGroup, ItemStack, Recipe};
///
/// let torch = Recipe::new(
///     vec![
///         ItemGroup::single(ItemStack::new("minecraft:coal", 1)),
///         ItemGroup::single(ItemStack::new("minecraft:stick", 1)),
///     ],
///     vec![ItemGroup::single(ItemStack::new("minecraft:torch", 4))],
/// );
///
/// assert_eq!(torch.output_count(), 4);
/// assert_eq!(torch.non_empty_inputs().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Input slots, possibly containing empty groups.
    pub inputs: Vec<ItemGroup>,

    /// Output slots; only the first is read.
    pub outputs: Vec<ItemGroup>,
}

impl Recipe {
    /// Create a recipe from its input and output slots.
    pub fn new(inputs: Vec<ItemGroup>, outputs: Vec<ItemGroup>) -> Self {
        Self { inputs, outputs }
    }

    /// The stack this recipe produces, if any.
    pub fn primary_output(&self) -> Option<&ItemStack> {
        self.outputs.first().and_then(ItemGroup::primary)
    }

    /// Units produced per craft, 0 when the recipe has no output.
    pub fn output_count(&self) -> u64 {
        self.primary_output().map_or(0, |s| s.count)
    }

    /// Input slots that actually require something.
    pub fn non_empty_inputs(&self) -> impl Iterator<Item = &ItemGroup> {
        self.inputs.iter().filter(|g| !g.is_empty())
    }

    /// Returns `true` for "one kind of input → 9 units" recipes.
    ///
    /// These unpack a storage block and are not how the unit item is
    /// really made.
    pub fn is_block_forming(&self) -> bool {
        self.primary_output().is_some()
            && self.output_count() == COMPRESSION_FACTOR
            && self.non_empty_inputs().count() == 1
    }

    /// Returns `true` for "9 identical inputs → 1 unit" recipes.
    ///
    /// Every one of the nine slots must be filled with the same ingredient.
    pub fn is_nugget_forming<M: StackMatcher + ?Sized>(&self, matcher: &M) -> bool {
        if self.primary_output().is_none() || self.output_count() != 1 {
            return false;
        }
        if self.inputs.len() as u64 != COMPRESSION_FACTOR {
            return false;
        }

        let mut first: Option<&ItemStack> = None;
        for slot in &self.inputs {
            let Some(stack) = slot.primary() else {
                return false;
            };
            match first {
                None => first = Some(stack),
                Some(f) if !same_ignoring_size(matcher, stack, f) => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Returns `true` if the recipe only converts between unit sizes.
    pub fn is_unit_conversion<M: StackMatcher + ?Sized>(&self, matcher: &M) -> bool {
        self.is_block_forming() || self.is_nugget_forming(matcher)
    }
}
