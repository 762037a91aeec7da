//! Catalog entity model.
//!
//! An [`Entity`] is one named, kind-tagged reference record (a spell, a monster,
//! a rule...). Entities are built once by the catalog loader and never mutated
//! afterwards; the UI holds them behind `Rc` so the result list and the detail
//! view can point at the same record without copying it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of entity categories in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Action,
    Condition,
    Feat,
    Feature,
    Item,
    Monster,
    ReferenceList,
    Rule,
    Spell,
    Trait,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Action,
        Self::Condition,
        Self::Feat,
        Self::Feature,
        Self::Item,
        Self::Monster,
        Self::ReferenceList,
        Self::Rule,
        Self::Spell,
        Self::Trait,
    ];

    /// Human-readable label, used in renderer headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Condition => "Condition",
            Self::Feat => "Feat",
            Self::Feature => "Feature",
            Self::Item => "Item",
            Self::Monster => "Monster",
            Self::ReferenceList => "Reference",
            Self::Rule => "Rule",
            Self::Spell => "Spell",
            Self::Trait => "Trait",
        }
    }

    /// Single glyph shown before the label.
    #[must_use]
    pub const fn icon(self) -> char {
        match self {
            Self::Action => '»',
            Self::Condition => '◎',
            Self::Feat => '★',
            Self::Feature => '◆',
            Self::Item => '⚒',
            Self::Monster => '☠',
            Self::ReferenceList => '≡',
            Self::Rule => '§',
            Self::Spell => '✦',
            Self::Trait => '◇',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Parses the catalog spelling of a kind.
    ///
    /// Matching ignores case and accepts `-`, `_` or a space as the word
    /// separator of `reference_list`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "action" => Ok(Self::Action),
            "condition" => Ok(Self::Condition),
            "feat" => Ok(Self::Feat),
            "feature" => Ok(Self::Feature),
            "item" => Ok(Self::Item),
            "monster" => Ok(Self::Monster),
            "reference_list" | "reference" => Ok(Self::ReferenceList),
            "rule" => Ok(Self::Rule),
            "spell" => Ok(Self::Spell),
            "trait" => Ok(Self::Trait),
            _ => Err(format!("unknown entity kind: {s}")),
        }
    }
}

/// A named entry inside a [`Block`], such as a monster action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    pub text: String,
}

/// A titled group of named entries ("Actions", "Legendary Actions", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<NamedEntry>,
}

/// One catalog record.
///
/// `name` and `kind` are all the list and the dispatch table need. The other
/// fields only matter to the kind-specific renderers, which read well-known
/// keys out of `properties` and ignore the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl Entity {
    /// Creates an entity with only a name and a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::domain::{Entity, EntityKind};
    ///
    /// let dash = Entity::new("Dash", EntityKind::Action);
    /// assert_eq!(dash.name, "Dash");
    /// assert!(dash.text.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            source: None,
            properties: BTreeMap::new(),
            text: Vec::new(),
            blocks: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Builder-style helper that sets one property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Builder-style helper that appends a paragraph of text.
    #[must_use]
    pub fn with_text(mut self, paragraph: impl Into<String>) -> Self {
        self.text.push(paragraph.into());
        self
    }

    /// Returns a non-empty property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
