//! Decomposer configuration.
//!
//! Which items count as base materials and which ingredients disqualify
//! a recipe are data, not code. `DecomposerConfig` is the serializable
//! form; [`DecomposerConfig::compile`] turns it into [`Rules`].

use crate::error::ConfigError;
use crate::group::ItemGroup;
use crate::stack::ItemStack;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Items never broken down, regardless of available recipes.
const DEFAULT_BASE_ITEMS: &[&str] = &[
    "minecraft:stick",
    "minecraft:torch",
    "minecraft:leather",
    "minecraft:paper",
    "minecraft:wool",
];

/// A recipe ingredient that makes the whole recipe unusable.
///
/// `meta: None` matches every metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// Regular expression matched against the full registry name.
    pub pattern: String,

    /// Exact metadata filter, or `None` for any.
    #[serde(default)]
    pub meta: Option<u32>,
}

impl BlacklistEntry {
    /// Blacklist every variant of the matching items.
    pub fn any_meta(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            meta: None,
        }
    }

    /// Blacklist only the variant with the given metadata.
    pub fn with_meta(pattern: impl Into<String>, meta: u32) -> Self {
        Self {
            pattern: pattern.into(),
            meta: Some(meta),
        }
    }
}

/// Serializable decomposer configuration.
///
/// # Examples
///
/// ```rust
/// use bomcalc::DecomposerConfig;
///
/// let config = DecomposerConfig::from_json(r#"{
///     "base_item_patterns": ["minecraft:.*_planks"],
///     "blacklist": [{"pattern": "thermalfoundation:material", "meta": 1024}]
/// }"#).unwrap();
///
/// let rules = config.compile().unwrap();
/// assert!(rules.matches_base_pattern(&bomcalc::ItemStack::new("minecraft:oak_planks", 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposerConfig {
    /// Registry-name patterns of items treated as base materials.
    pub base_item_patterns: Vec<String>,

    /// Ingredients that disqualify a recipe during selection.
    pub blacklist: Vec<BlacklistEntry>,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            base_item_patterns: DEFAULT_BASE_ITEMS.iter().map(|s| s.to_string()).collect(),
            // Pyrotheum dust only shows up in ore processing.
            blacklist: vec![BlacklistEntry::any_meta("thermalfoundation:material")],
        }
    }
}

impl DecomposerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "decomposer config",
            source,
        })
    }

    /// Compile every pattern.
    pub fn compile(&self) -> Result<Rules, ConfigError> {
        let base_items = self
            .base_item_patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;

        let blacklist = self
            .blacklist
            .iter()
            .map(|entry| {
                Ok(CompiledEntry {
                    pattern: compile_pattern(&entry.pattern)?,
                    meta: entry.meta,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Rules {
            base_items,
            blacklist,
        })
    }
}

/// Patterns must match the whole registry name.
fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[derive(Debug, Clone)]
struct CompiledEntry {
    pattern: Regex,
    meta: Option<u32>,
}

/// Compiled configuration used during decomposition.
#[derive(Debug, Clone)]
pub struct Rules {
    base_items: Vec<Regex>,
    blacklist: Vec<CompiledEntry>,
}

impl Rules {
    /// Rules that never stop expansion and reject no recipe.
    pub fn permissive() -> Self {
        Self {
            base_items: Vec::new(),
            blacklist: Vec::new(),
        }
    }

    /// Returns `true` if the stack's registry name matches a base pattern.
    pub fn matches_base_pattern(&self, stack: &ItemStack) -> bool {
        let name = stack.item.as_str();
        self.base_items.iter().any(|re| re.is_match(name))
    }

    /// Returns `true` if the group must not be decomposed.
    ///
    /// Groups with several alternatives are always base: picking one
    /// variant's recipe would be arbitrary.
    pub fn is_base_item(&self, group: &ItemGroup) -> bool {
        if group.is_ambiguous() {
            return true;
        }
        group.primary().is_some_and(|s| self.matches_base_pattern(s))
    }

    /// Returns `true` if the stack matches a blacklist entry.
    pub fn is_blacklisted(&self, stack: &ItemStack) -> bool {
        let name = stack.item.as_str();
        self.blacklist
            .iter()
            .any(|e| e.pattern.is_match(name) && e.meta.map_or(true, |m| m == stack.meta))
    }
}

impl Default for Rules {
    fn default() -> Self {
        DecomposerConfig::default()
            .compile()
            .expect("built-in patterns are valid regular expressions")
    }
}
