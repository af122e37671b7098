//! Recipe sources.
//!
//! The decomposer never owns recipe data. It asks a [`RecipeSource`]
//! for the candidate recipes producing an item. Sources must answer
//! deterministically: the same item always yields the same candidates
//! in the same order, because selection is first-fit.

use crate::error::ConfigError;
use crate::recipe::Recipe;
use crate::stack::ItemStack;
use serde::{Deserialize, Serialize};

/// Capability to look up the recipes that produce an item.
///
/// Any `Fn(&ItemStack) -> Vec<Recipe>` closure is a source, which keeps
/// fake recipe graphs in tests short.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ItemStack, Recipe, RecipeSource};
///
/// let nothing = |_: &ItemStack| Vec::<Recipe>::new();
/// assert!(nothing.recipes_for(&ItemStack::new("minecraft:stone", 1)).is_empty());
/// ```
pub trait RecipeSource {
    /// Candidate recipes whose output is `stack`, in preference order.
    fn recipes_for(&self, stack: &ItemStack) -> Vec<Recipe>;
}

impl<F> RecipeSource for F
where
    F: Fn(&ItemStack) -> Vec<Recipe>,
{
    fn recipes_for(&self, stack: &ItemStack) -> Vec<Recipe> {
        self(stack)
    }
}

/// An in-memory recipe source.
///
/// Recipes are answered in registration order. A recipe is a candidate
/// for a stack when its primary output has the same item and metadata.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ItemGroup, ItemStack, Recipe, RecipeBook, RecipeSource};
///
/// let mut book = RecipeBook::new();
/// book.add(Recipe::new(
///     vec![ItemGroup::single(ItemStack::new("minecraft:planks", 2))],
///     vec![ItemGroup::single(ItemStack::new("minecraft:stick", 4))],
/// ));
///
/// let found = book.recipes_for(&ItemStack::new("minecraft:stick", 1));
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book from a JSON array of recipes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "recipe book",
            source,
        })
    }

    /// Register a recipe after every existing one.
    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if no recipe is registered.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

impl RecipeSource for RecipeBook {
    fn recipes_for(&self, stack: &ItemStack) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| {
                r.primary_output()
                    .is_some_and(|out| out.item == stack.item && out.meta == stack.meta)
            })
            .cloned()
            .collect()
    }
}
