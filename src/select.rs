//! Recipe selection.
//!
//! Selection is first-fit in source order: the first candidate that is
//! not a unit conversion and uses no blacklisted ingredient wins. There
//! is no scoring, so equally valid recipes are decided by the order the
//! recipe source returns them.

use crate::config::Rules;
use crate::recipe::Recipe;
use crate::stack::StackMatcher;

/// Pick the recipe used to decompose an item.
///
/// Returns `None` when every candidate is filtered out.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{pick_recipe, ExactMatch, ItemGroup, ItemStack, Recipe, Rules};
///
/// let slot = |item: &str| ItemGroup::single(ItemStack::new(item, 1));
/// let melt = Recipe::new(vec![slot("minecraft:iron_nugget"); 9], vec![slot("minecraft:iron_ingot")]);
/// let alloy = Recipe::new(
///     vec![slot("mod:iron_dust"), slot("minecraft:coal")],
///     vec![slot("minecraft:iron_ingot")],
/// );
///
/// let candidates = vec![melt, alloy.clone()];
/// let chosen = pick_recipe(&candidates, &Rules::default(), &ExactMatch);
/// assert_eq!(chosen, Some(&alloy));
/// ```
pub fn pick_recipe<'a, M: StackMatcher + ?Sized>(
    candidates: &'a [Recipe],
    rules: &Rules,
    matcher: &M,
) -> Option<&'a Recipe> {
    candidates
        .iter()
        .find(|recipe| !recipe.is_unit_conversion(matcher) && !uses_blacklisted(recipe, rules))
}

fn uses_blacklisted(recipe: &Recipe, rules: &Rules) -> bool {
    recipe
        .non_empty_inputs()
        .filter_map(|slot| slot.primary())
        .any(|stack| rules.is_blacklisted(stack))
}
