//! Ingredient groups.
//!
//! An `ItemGroup` is one ingredient slot: an ordered list of
//! interchangeable stacks (for example every ore-dictionary variant of
//! a copper ingot). The first alternative is the group's identity.

use crate::stack::{same_ignoring_size, ItemStack, StackMatcher};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interchangeable alternatives for a single ingredient slot.
///
/// Quantities are stored per alternative and kept in sync when groups
/// are merged.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ItemGroup, ItemStack};
///
/// let copper = ItemGroup::of(vec![
///     ItemStack::new("thermalfoundation:material", 1).with_meta(128),
///     ItemStack::new("ic2:ingot", 1).with_meta(2),
/// ]);
///
/// assert!(copper.is_ambiguous());
/// assert_eq!(copper.primary().unwrap().meta, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemGroup(Vec<ItemStack>);

impl ItemGroup {
    /// A group with a single alternative.
    pub fn single(stack: ItemStack) -> Self {
        Self(vec![stack])
    }

    /// A group from an ordered list of alternatives.
    pub fn of(alternatives: Vec<ItemStack>) -> Self {
        Self(alternatives)
    }

    /// A group with no alternatives (an unused recipe slot).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The first alternative, which identifies the group.
    pub fn primary(&self) -> Option<&ItemStack> {
        self.0.first()
    }

    /// All alternatives in order.
    pub fn alternatives(&self) -> &[ItemStack] {
        &self.0
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the group has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if more than one stack can fill the slot.
    pub fn is_ambiguous(&self) -> bool {
        self.0.len() > 1
    }

    /// Quantity of the primary alternative, 0 for an empty group.
    pub fn count(&self) -> u64 {
        self.primary().map_or(0, |s| s.count)
    }

    /// Add `amount` to every alternative.
    pub fn add_count(&mut self, amount: u64) {
        for stack in &mut self.0 {
            stack.count = stack.count.saturating_add(amount);
        }
    }

    /// Remove one unit from the primary alternative.
    pub(crate) fn take_one(&mut self) {
        if let Some(first) = self.0.first_mut() {
            first.count = first.count.saturating_sub(1);
        }
    }

    /// Compare identities ignoring quantities.
    ///
    /// Two empty groups are the same; otherwise the primary alternatives
    /// are compared with [`same_ignoring_size`].
    pub fn same_ingredient<M: StackMatcher + ?Sized>(&self, other: &ItemGroup, matcher: &M) -> bool {
        match (self.primary(), other.primary()) {
            (None, None) => true,
            (Some(a), Some(b)) => same_ignoring_size(matcher, a, b),
            _ => false,
        }
    }
}

impl fmt::Display for ItemGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.primary() else {
            return f.write_str("(empty)");
        };
        write!(f, "{}x {}", first.count, first.item)?;
        if first.meta != 0 {
            write!(f, "@{}", first.meta)?;
        }
        if self.is_ambiguous() {
            write!(f, " (+{} alternatives)", self.len() - 1)?;
        }
        Ok(())
    }
}

impl From<ItemStack> for ItemGroup {
    fn from(stack: ItemStack) -> Self {
        Self::single(stack)
    }
}

/// Insert `incoming` into `target`, summing quantities.
///
/// If `target` already holds the same ingredient, the incoming primary
/// quantity is added to every alternative of that entry. Otherwise a copy
/// of `incoming` is appended. Empty groups carry nothing and are skipped.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{merge_into, ExactMatch, ItemGroup, ItemStack};
///
/// let mut totals = Vec::new();
/// let iron = ItemGroup::single(ItemStack::new("minecraft:iron_ingot", 3));
///
/// merge_into(&mut totals, &iron, &ExactMatch);
/// merge_into(&mut totals, &iron, &ExactMatch);
///
/// assert_eq!(totals.len(), 1);
/// assert_eq!(totals[0].count(), 6);
/// ```
pub fn merge_into<M: StackMatcher + ?Sized>(
    target: &mut Vec<ItemGroup>,
    incoming: &ItemGroup,
    matcher: &M,
) {
    if incoming.is_empty() {
        return;
    }

    match target
        .iter_mut()
        .find(|existing| existing.same_ingredient(incoming, matcher))
    {
        Some(existing) => existing.add_count(incoming.count()),
        None => target.push(incoming.clone()),
    }
}

/// Merge every group of `incoming` into `target`, in order.
pub fn merge_all<M: StackMatcher + ?Sized>(
    target: &mut Vec<ItemGroup>,
    incoming: &[ItemGroup],
    matcher: &M,
) {
    for group in incoming {
        merge_into(target, group, matcher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::ExactMatch;

    fn group(item: &str, count: u64) -> ItemGroup {
        ItemGroup::single(ItemStack::new(item, count))
    }

    #[test]
    fn test_merge_appends_new_ingredient() {
        let mut totals = Vec::new();
        merge_into(&mut totals, &group("minecraft:stick", 2), &ExactMatch);
        merge_into(&mut totals, &group("minecraft:cobblestone", 3), &ExactMatch);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].count(), 2);
        assert_eq!(totals[1].count(), 3);
    }

    #[test]
    fn test_merge_syncs_alternatives() {
        let ore_dict = ItemGroup::of(vec![
            ItemStack::new("mod_a:copper", 1),
            ItemStack::new("mod_b:copper", 1),
        ]);
        let mut totals = vec![ore_dict.clone()];

        merge_into(&mut totals, &ore_dict.clone(), &ExactMatch);

        assert_eq!(totals.len(), 1);
        assert!(totals[0].alternatives().iter().all(|s| s.count == 2));
    }

    #[test]
    fn test_merge_uses_incoming_primary_count() {
        let mut totals = vec![group("minecraft:iron_ingot", 1)];
        let incoming = ItemGroup::of(vec![
            ItemStack::new("minecraft:iron_ingot", 4),
            ItemStack::new("othermod:iron_ingot", 7),
        ]);

        merge_into(&mut totals, &incoming, &ExactMatch);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].count(), 5);
    }

    #[test]
    fn test_merge_appends_copy() {
        let mut totals = Vec::new();
        let incoming = group("minecraft:paper", 1);
        merge_into(&mut totals, &incoming, &ExactMatch);
        totals[0].add_count(10);

        assert_eq!(incoming.count(), 1);
        assert_eq!(totals[0].count(), 11);
    }

    #[test]
    fn test_merge_skips_empty_group() {
        let mut totals = Vec::new();
        merge_into(&mut totals, &ItemGroup::empty(), &ExactMatch);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_same_ingredient_empty_groups() {
        assert!(ItemGroup::empty().same_ingredient(&ItemGroup::empty(), &ExactMatch));
        assert!(!ItemGroup::empty().same_ingredient(&group("minecraft:stick", 1), &ExactMatch));
    }

    #[test]
    fn test_display() {
        assert_eq!(group("minecraft:stick", 2).to_string(), "2x minecraft:stick");
        assert_eq!(ItemGroup::empty().to_string(), "(empty)");

        let wool = ItemGroup::of(vec![
            ItemStack::new("minecraft:wool", 1).with_meta(14),
            ItemStack::new("minecraft:wool", 1).with_meta(1),
        ]);
        assert_eq!(wool.to_string(), "1x minecraft:wool@14 (+1 alternatives)");
    }

    #[test]
    fn test_take_one_saturates() {
        let mut g = group("minecraft:stick", 1);
        g.take_one();
        g.take_one();
        assert_eq!(g.count(), 0);
    }
}
