//! Byproduct ledger.
//!
//! A recipe that makes more than one unit leaves a surplus. The surplus
//! is banked here as credit and spent the next time the same ingredient
//! is needed anywhere in the same decomposition, so it is not produced
//! twice. One ledger lives for exactly one top-level call and is shared
//! by every branch of it, so the order branches are visited matters.

use crate::group::{merge_into, ItemGroup};
use crate::stack::{ItemStack, StackMatcher};

/// Pending byproduct credit.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ByproductLedger, ExactMatch, ItemGroup, ItemStack};
///
/// let mut ledger = ByproductLedger::new();
/// // A craft yielding 4 torches covers the one we needed plus 3 spare.
/// ledger.bank(&ItemStack::new("minecraft:torch", 4), &ExactMatch);
///
/// let torch = ItemGroup::single(ItemStack::new("minecraft:torch", 1));
/// assert!(ledger.try_consume(&torch, &ExactMatch));
/// assert_eq!(ledger.credit_for(&torch, &ExactMatch), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByproductLedger {
    credits: Vec<ItemGroup>,
}

impl ByproductLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank the surplus of one craft producing `output`.
    ///
    /// One unit is the one being asked for; the remaining `count - 1`
    /// become credit. Outputs of a single unit bank nothing.
    pub fn bank<M: StackMatcher + ?Sized>(&mut self, output: &ItemStack, matcher: &M) {
        if output.count <= 1 {
            return;
        }
        let surplus = output.clone().with_count(output.count - 1);
        merge_into(&mut self.credits, &ItemGroup::single(surplus), matcher);
    }

    /// Spend one unit of credit for `group`.
    ///
    /// Returns `true` if credit was available. Exhausted entries are
    /// empty stacks and no longer match.
    pub fn try_consume<M: StackMatcher + ?Sized>(&mut self, group: &ItemGroup, matcher: &M) -> bool {
        if group.is_empty() {
            return false;
        }
        match self
            .credits
            .iter_mut()
            .find(|credit| credit.same_ingredient(group, matcher))
        {
            Some(credit) => {
                credit.take_one();
                true
            }
            None => false,
        }
    }

    /// Credit currently available for `group`.
    pub fn credit_for<M: StackMatcher + ?Sized>(&self, group: &ItemGroup, matcher: &M) -> u64 {
        self.credits
            .iter()
            .filter(|credit| credit.same_ingredient(group, matcher))
            .map(ItemGroup::count)
            .sum()
    }

    /// Entries that still hold credit, in the order they were banked.
    pub fn remaining(&self) -> impl Iterator<Item = &ItemGroup> {
        self.credits.iter().filter(|c| c.count() > 0)
    }

    /// Consume the ledger, keeping entries that still hold credit.
    pub fn into_remaining(self) -> Vec<ItemGroup> {
        self.credits.into_iter().filter(|c| c.count() > 0).collect()
    }
}
