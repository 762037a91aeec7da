//! Kind-to-renderer dispatch table.

use super::renderers::{
    FeatureRenderer, ItemRenderer, MonsterRenderer, ReferenceListRenderer, SimpleRenderer, SpellRenderer,
    TraitRenderer,
};
use super::Renderer;
use crate::domain::{Entity, EntityKind};
use std::collections::HashMap;
use std::fmt;

/// Characters stripped from both ends of renderer output.
const TRIMMED: [char; 3] = [' ', '\n', '\r'];

/// Maps each [`EntityKind`] to the renderer for it.
///
/// Built once at startup and read-only afterwards. A kind without an entry
/// renders as the entity's bare name.
#[derive(Default)]
pub struct RendererTable {
    renderers: HashMap<EntityKind, Box<dyn Renderer>>,
}

impl fmt::Debug for RendererTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.renderers.keys().collect();
        kinds.sort();
        f.debug_struct("RendererTable").field("kinds", &kinds).finish()
    }
}

impl RendererTable {
    /// An empty table; every kind falls back to the bare name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full table used by the plugin.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(EntityKind::Action, SimpleRenderer::for_kind(EntityKind::Action))
            .with(EntityKind::Condition, SimpleRenderer::for_kind(EntityKind::Condition))
            .with(EntityKind::Feat, SimpleRenderer::for_kind(EntityKind::Feat))
            .with(EntityKind::Feature, FeatureRenderer)
            .with(EntityKind::Item, ItemRenderer)
            .with(EntityKind::Monster, MonsterRenderer)
            .with(EntityKind::ReferenceList, ReferenceListRenderer)
            .with(EntityKind::Rule, SimpleRenderer::for_kind(EntityKind::Rule))
            .with(EntityKind::Spell, SpellRenderer)
            .with(EntityKind::Trait, TraitRenderer)
    }

    /// Registers `renderer` for `kind`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, kind: EntityKind, renderer: impl Renderer + 'static) -> Self {
        self.renderers.insert(kind, Box::new(renderer));
        self
    }

    #[must_use]
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Renders `entity` with the renderer for its kind.
    ///
    /// Output is trimmed of surrounding spaces, `\n` and `\r`. Unmapped kinds
    /// return the name untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::domain::{Entity, EntityKind};
    /// use lorekeeper::render::RendererTable;
    ///
    /// let table = RendererTable::new();
    /// assert_eq!(table.render(&Entity::new("Foo", EntityKind::Rule)), "Foo");
    /// ```
    #[must_use]
    pub fn render(&self, entity: &Entity) -> String {
        match self.renderers.get(&entity.kind) {
            Some(renderer) => renderer.render(entity).trim_matches(TRIMMED.as_slice()).to_string(),
            None => {
                tracing::trace!(kind = %entity.kind, "no renderer registered, falling back to name");
                entity.name.clone()
            }
        }
    }
}
