//! Catalog record models.
//!
//! These are the on-disk shapes. They are deliberately looser than the domain
//! [`Entity`]: the kind is a free string so that a record of a kind this build
//! does not know about can be skipped instead of failing the whole file.

use crate::domain::{Block, Entity, EntityKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Paragraph text, written either as one string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    One(String),
    Many(Vec<String>),
}

impl Default for TextField {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<TextField> for Vec<String> {
    fn from(text: TextField) -> Self {
        match text {
            TextField::One(paragraph) => vec![paragraph],
            TextField::Many(paragraphs) => paragraphs,
        }
    }
}

/// One entity as stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub text: TextField,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl EntityRecord {
    /// Converts the record into a domain entity.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when the kind is unknown or the
    /// name is blank. Callers treat this as "skip the record".
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::storage::EntityRecord;
    ///
    /// let record: EntityRecord = serde_json::from_str(
    ///     r#"{ "name": "Grappled", "kind": "condition", "text": "Speed becomes 0." }"#,
    /// ).unwrap();
    /// let entity = record.into_entity().unwrap();
    /// assert_eq!(entity.text, vec!["Speed becomes 0."]);
    /// ```
    pub fn into_entity(self) -> Result<Entity, String> {
        let kind: EntityKind = self.kind.parse()?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(format!("{kind} record without a name"));
        }

        Ok(Entity {
            name: name.to_string(),
            kind,
            source: self.source,
            properties: self.properties,
            text: self.text.into(),
            blocks: self.blocks,
            references: self.references,
        })
    }
}

/// Entities read from one or more catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub entities: Vec<Entity>,
    /// Records dropped because of an unknown kind or a blank name.
    pub skipped: usize,
}

impl LoadedCatalog {
    /// Appends another catalog's entities and skip count.
    pub fn merge(&mut self, other: Self) {
        self.entities.extend(other.entities);
        self.skipped += other.skipped;
    }

    /// Orders entities by name, ignoring case. Equal names keep file order.
    pub fn sort(&mut self) {
        self.entities.sort_by_cached_key(|e| e.name.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_rejected() {
        let record = EntityRecord {
            name: "Airship".to_string(),
            kind: "vehicle".to_string(),
            source: None,
            properties: BTreeMap::new(),
            text: TextField::default(),
            blocks: Vec::new(),
            references: Vec::new(),
        };
        assert!(record.into_entity().is_err());
    }

    #[test]
    fn text_accepts_list_form() {
        let record: EntityRecord = serde_json::from_str(
            r#"{ "name": " Shove ", "kind": "action", "text": ["One.", "Two."] }"#,
        )
        .unwrap();
        let entity = record.into_entity().unwrap();

        assert_eq!(entity.name, "Shove");
        assert_eq!(entity.kind, EntityKind::Action);
        assert_eq!(entity.text, vec!["One.", "Two."]);
    }

    #[test]
    fn sort_ignores_case_and_is_stable() {
        let mut catalog = LoadedCatalog {
            entities: vec![
                Entity::new("shield", EntityKind::Spell),
                Entity::new("Arrow", EntityKind::Item),
                Entity::new("Shield", EntityKind::Item),
            ],
            skipped: 0,
        };
        catalog.sort();

        let order: Vec<_> = catalog.entities.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(
            order,
            vec![
                ("Arrow", EntityKind::Item),
                ("shield", EntityKind::Spell),
                ("Shield", EntityKind::Item),
            ]
        );
    }
}
