//! Decomposer module.
//!
//! Provides the `Decomposer` type, the main entry point. It expands
//! each input of a recipe through that input's own recipe, recursively,
//! until only base ingredients remain, and sums what it finds.
//!
//! Expansion is total: empty slots, missing recipes, cycles and
//! runaway depth all end a branch by keeping the ingredient as-is, so
//! a broken recipe graph shows up as an odd bill, never as an error.

use crate::config::Rules;
use crate::graph::{ExpansionTree, LeafReason, Outcome};
use crate::group::{merge_all, ItemGroup};
use crate::ledger::ByproductLedger;
use crate::recipe::Recipe;
use crate::resolved::BillOfMaterials;
use crate::select::pick_recipe;
use crate::source::RecipeSource;
use crate::stack::{same_ignoring_size, ExactMatch, ItemStack, StackMatcher};
use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

/// Ancestor-path length past which an ingredient is kept as-is.
pub const MAX_PATH_LEN: usize = 512;

/// Recursive bill-of-materials resolver.
///
/// The decomposer is stateless between calls: every top-level call gets
/// its own byproduct ledger and cycle-detection path.
///
/// Expansion of one ingredient stops, keeping the ingredient, at the
/// first of:
/// 1. byproduct credit covers it (it then contributes nothing),
/// 2. its ancestor path is longer than [`MAX_PATH_LEN`],
/// 3. the same group is one of its ancestors,
/// 4. it is a base item (configured pattern or several alternatives),
/// 5. no usable recipe produces it,
/// 6. its recipe needs one of its ancestors (the ancestor is kept).
///
/// # Examples
///
/// ```rust
/// use bomcalc::*;
///
/// let slot = |item: &str, n: u64| ItemGroup::single(ItemStack::new(item, n));
///
/// let mut book = RecipeBook::new();
/// // 1 log -> 4 planks
/// book.add(Recipe::new(vec![slot("minecraft:log", 1)], vec![slot("minecraft:planks", 4)]));
///
/// // A crafting table needs four planks, one per slot.
/// let table = Recipe::new(
///     vec![slot("minecraft:planks", 1); 4],
///     vec![slot("minecraft:crafting_table", 1)],
/// );
///
/// let decomposer = Decomposer::new(book);
/// let base = decomposer.get_base_ingredients(&table.inputs, &table.outputs[0]);
///
/// // The first plank is crafted, the other three come out of the same craft.
/// assert_eq!(base, vec![slot("minecraft:log", 1)]);
/// ```
pub struct Decomposer<S, M = ExactMatch> {
    source: S,
    rules: Rules,
    matcher: M,
}

impl<S: RecipeSource> Decomposer<S> {
    /// Create a decomposer with the default rules.
    pub fn new(source: S) -> Self {
        Self::with_rules(source, Rules::default())
    }

    /// Create a decomposer with custom rules.
    pub fn with_rules(source: S, rules: Rules) -> Self {
        Self {
            source,
            rules,
            matcher: ExactMatch,
        }
    }
}

impl<S: RecipeSource, M: StackMatcher> Decomposer<S, M> {
    /// Replace the ingredient matcher.
    pub fn with_matcher<N: StackMatcher>(self, matcher: N) -> Decomposer<S, N> {
        Decomposer {
            source: self.source,
            rules: self.rules,
            matcher,
        }
    }

    /// The recipe source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The rules in use.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Flatten a recipe's inputs into base ingredients.
    ///
    /// `crafted` is what the recipe makes; it seeds every input's
    /// ancestor path so the recipe cannot be expanded through itself.
    /// The result holds each base ingredient once, with its total
    /// quantity.
    pub fn get_base_ingredients(&self, inputs: &[ItemGroup], crafted: &ItemGroup) -> Vec<ItemGroup> {
        self.decompose(inputs, crafted).ingredients
    }

    /// Like [`get_base_ingredients`](Self::get_base_ingredients), with
    /// the leftover byproducts and the expansion tree.
    pub fn decompose(&self, inputs: &[ItemGroup], crafted: &ItemGroup) -> BillOfMaterials {
        debug!(crafted = %crafted, inputs = inputs.len(), "decomposing recipe");

        let mut state = Expansion {
            ledger: ByproductLedger::new(),
            tree: ExpansionTree::new(crafted.clone()),
            seen: Vec::new(),
        };
        let root = state.tree.root();
        let mut ingredients = Vec::new();

        for input in inputs {
            state.seen.clear();
            state.seen.push(crafted.clone());
            let found = self.expand(input, root, &mut state);
            merge_all(&mut ingredients, &found, &self.matcher);
        }

        let leftovers = state.ledger.into_remaining();
        debug!(
            crafted = %crafted,
            ingredients = ingredients.len(),
            leftovers = leftovers.len(),
            nodes = state.tree.len(),
            "decomposition finished"
        );

        BillOfMaterials {
            ingredients,
            leftovers,
            tree: state.tree,
        }
    }

    /// Decompose a whole recipe; its first output is the crafted stack.
    pub fn decompose_recipe(&self, recipe: &Recipe) -> BillOfMaterials {
        let crafted = recipe.outputs.first().cloned().unwrap_or_default();
        self.decompose(&recipe.inputs, &crafted)
    }

    /// Decompose the recipe that would be chosen for `stack`.
    ///
    /// Returns `None` if no usable recipe produces it.
    pub fn decompose_item(&self, stack: &ItemStack) -> Option<BillOfMaterials> {
        let candidates = self.source.recipes_for(stack);
        let recipe = pick_recipe(&candidates, &self.rules, &self.matcher)?;
        Some(self.decompose_recipe(recipe))
    }

    fn expand(&self, group: &ItemGroup, parent: NodeIndex, state: &mut Expansion) -> Vec<ItemGroup> {
        let Some(primary) = group.primary() else {
            return Vec::new();
        };

        if state.ledger.try_consume(group, &self.matcher) {
            trace!(item = %primary.item, depth = state.seen.len(), "covered by byproduct credit");
            state.tree.add(parent, group.clone(), Outcome::Credited);
            return Vec::new();
        }

        if state.seen.len() > MAX_PATH_LEN {
            return state.leaf(parent, group, LeafReason::DepthLimit);
        }
        if state.seen.iter().any(|ancestor| ancestor == group) {
            return state.leaf(parent, group, LeafReason::Cycle);
        }
        if self.rules.is_base_item(group) {
            let reason = if group.is_ambiguous() {
                LeafReason::Ambiguous
            } else {
                LeafReason::BaseItem
            };
            return state.leaf(parent, group, reason);
        }

        let candidates = self.source.recipes_for(primary);
        let Some(recipe) = pick_recipe(&candidates, &self.rules, &self.matcher) else {
            return state.leaf(parent, group, LeafReason::NoRecipe);
        };

        if let Some(ancestor) = self.reused_ancestor(recipe, &state.seen).cloned() {
            trace!(
                item = %primary.item,
                ancestor = %ancestor,
                depth = state.seen.len(),
                "recipe needs an ancestor, keeping the ancestor"
            );
            // The node shows what ends up in the bill.
            state
                .tree
                .add(parent, ancestor.clone(), Outcome::Leaf(LeafReason::ReusedAncestor));
            return vec![ancestor];
        }

        if let Some(output) = recipe.primary_output() {
            if output.count > 1 {
                trace!(item = %output.item, surplus = output.count - 1, "banking byproduct");
                state.ledger.bank(output, &self.matcher);
            }
        }

        let node = state.tree.add(parent, group.clone(), Outcome::Expanded);
        state.seen.push(group.clone());

        let mut found = Vec::new();
        for input in recipe.non_empty_inputs() {
            let base = self.expand(input, node, state);
            merge_all(&mut found, &base, &self.matcher);
        }

        state.seen.pop();
        found
    }

    /// First ancestor whose item is an input of `recipe`.
    fn reused_ancestor<'a>(&self, recipe: &Recipe, seen: &'a [ItemGroup]) -> Option<&'a ItemGroup> {
        seen.iter().find(|ancestor| {
            ancestor.primary().is_some_and(|a| {
                recipe
                    .non_empty_inputs()
                    .filter_map(ItemGroup::primary)
                    .any(|input| same_ignoring_size(&self.matcher, input, a))
            })
        })
    }
}

/// Mutable state of one top-level call, threaded through the recursion.
struct Expansion {
    ledger: ByproductLedger,
    tree: ExpansionTree,
    /// Ancestors of the group being expanded, crafted stack first.
    seen: Vec<ItemGroup>,
}

impl Expansion {
    fn leaf(&mut self, parent: NodeIndex, group: &ItemGroup, reason: LeafReason) -> Vec<ItemGroup> {
        trace!(group = %group, depth = self.seen.len(), %reason, "kept as base ingredient");
        self.tree.add(parent, group.clone(), Outcome::Leaf(reason));
        vec![group.clone()]
    }
}
