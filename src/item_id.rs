//! Registry names.
//!
//! Every stack, recipe slot and ledger entry carries the name of its item,
//! and deep expansions clone those names constantly. `ItemId` shares one
//! allocation per name so a clone is a reference-count bump.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A registry name such as `minecraft:iron_ingot`.
///
/// Serialized as a bare JSON string.
///
/// # Examples
///
/// ```rust
/// use bomcalc::ItemId;
///
/// let ingot = ItemId::new("minecraft:iron_ingot");
/// let same: ItemId = "minecraft:iron_ingot".into();
/// let owned: ItemId = String::from("minecraft:iron_ingot").into();
///
/// assert_eq!(ingot, same);
/// assert_eq!(ingot, owned);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The name as written in recipe data, e.g. `"minecraft:stick"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ItemId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ItemId::from)
    }
}
