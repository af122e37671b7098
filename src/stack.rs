//! Item stacks and ingredient matching.
//!
//! An `ItemStack` is one concrete item with a quantity. Whether two
//! stacks are "the same ingredient" is decided by a [`StackMatcher`],
//! which the host can replace to account for data the core knows
//! nothing about (capabilities, custom tag rules, and so on).

use crate::item_id::ItemId;
use serde::{Deserialize, Serialize};

/// A quantity of one concrete item.
///
/// A stack with a count of zero is empty.
///
/// # Examples
///
/// ```rust
/// use bomcalc::ItemStack;
///
/// let wool = ItemStack::new("minecraft:wool", 3).with_meta(14);
/// assert_eq!(wool.item.as_str(), "minecraft:wool");
/// assert_eq!(wool.meta, 14);
/// assert_eq!(wool.count, 3);
/// assert!(!wool.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Registry name of the item.
    pub item: ItemId,

    /// Metadata (damage) value distinguishing item variants.
    #[serde(default)]
    pub meta: u32,

    /// Auxiliary tag data, compared for equality only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<serde_json::Value>,

    /// Number of items in the stack.
    pub count: u64,
}

impl ItemStack {
    /// Create a stack with metadata 0 and no tag.
    pub fn new(item: impl Into<ItemId>, count: u64) -> Self {
        Self {
            item: item.into(),
            meta: 0,
            tag: None,
            count,
        }
    }

    /// Set the metadata value.
    pub fn with_meta(mut self, meta: u32) -> Self {
        self.meta = meta;
        self
    }

    /// Attach tag data.
    pub fn with_tag(mut self, tag: serde_json::Value) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Replace the quantity.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Host-supplied predicate deciding whether two non-empty stacks are
/// the same ingredient, ignoring quantity.
///
/// Any `Fn(&ItemStack, &ItemStack) -> bool` closure is a matcher.
///
/// # Examples
///
/// ```rust
/// use bomcalc::{ItemStack, StackMatcher};
///
/// // Ignore metadata entirely.
/// let by_item = |a: &ItemStack, b: &ItemStack| a.item == b.item;
///
/// let white = ItemStack::new("minecraft:wool", 1);
/// let red = ItemStack::new("minecraft:wool", 1).with_meta(14);
/// assert!(by_item.same_ingredient(&white, &red));
/// ```
pub trait StackMatcher {
    /// Returns `true` if `a` and `b` are the same ingredient.
    fn same_ingredient(&self, a: &ItemStack, b: &ItemStack) -> bool;
}

/// Default matcher: same item, same metadata and equal tag data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl StackMatcher for ExactMatch {
    fn same_ingredient(&self, a: &ItemStack, b: &ItemStack) -> bool {
        a.item == b.item && a.meta == b.meta && a.tag == b.tag
    }
}

impl<F> StackMatcher for F
where
    F: Fn(&ItemStack, &ItemStack) -> bool,
{
    fn same_ingredient(&self, a: &ItemStack, b: &ItemStack) -> bool {
        self(a, b)
    }
}

/// Compare two stacks ignoring their size.
///
/// Two empty stacks are equal; an empty stack never equals a non-empty
/// one. Otherwise the matcher decides.
pub fn same_ignoring_size<M: StackMatcher + ?Sized>(
    matcher: &M,
    a: &ItemStack,
    b: &ItemStack,
) -> bool {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => true,
        (false, false) => matcher.same_ingredient(a, b),
        _ => false,
    }
}
