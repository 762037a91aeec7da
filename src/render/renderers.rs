//! Kind-specific renderers.
//!
//! Each renderer reads the well-known property keys for its kind and ignores
//! everything else. Missing properties simply drop the line they would have
//! produced, so a sparse record still renders as its heading plus text.

use super::markup::Markup;
use super::Renderer;
use crate::domain::{Entity, EntityKind};

const ABILITIES: [(&str, &str); 6] = [
    ("str", "STR"),
    ("dex", "DEX"),
    ("con", "CON"),
    ("int", "INT"),
    ("wis", "WIS"),
    ("cha", "CHA"),
];

/// Generic renderer for kinds without their own layout: a label line, the
/// name, an optional prerequisite and the description.
#[derive(Debug, Clone)]
pub struct SimpleRenderer {
    label: String,
}

impl SimpleRenderer {
    /// Builds the label from the kind's icon and name, e.g. `★ Feat`.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        Self {
            label: format!("{} {}", kind.icon(), kind.label()),
        }
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.line(&self.label)
            .heading(&entity.name)
            .field("Prerequisite", entity.property("prerequisite"))
            .paragraphs(&entity.text);
        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemRenderer;

impl Renderer for ItemRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name);

        let mut summary = join_present(&[entity.property("type"), entity.property("rarity")], ", ");
        if let Some(attunement) = attunement(entity.property("attunement")) {
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(&attunement);
        }
        out.line(&capitalize(&summary));

        let weight = entity.property("weight").map(|w| format!("Weight: {w}"));
        let value = entity.property("value").map(|v| format!("Value: {v}"));
        out.line(&join_present(&[weight.as_deref(), value.as_deref()], "  ·  "));

        out.paragraphs(&entity.text);
        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpellRenderer;

impl Renderer for SpellRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name)
            .line(&spell_level_line(entity))
            .blank()
            .field("Casting Time", entity.property("casting_time"))
            .field("Range", entity.property("range"))
            .field("Components", entity.property("components"))
            .field("Duration", entity.property("duration"))
            .paragraphs(&entity.text);

        if let Some(classes) = entity.property("classes") {
            out.blank().field("Classes", Some(classes));
        }
        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterRenderer;

impl Renderer for MonsterRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name);

        let creature = join_present(&[entity.property("size"), entity.property("type")], " ");
        let summary = join_present(
            &[Some(creature.as_str()).filter(|s| !s.is_empty()), entity.property("alignment")],
            ", ",
        );
        out.line(&capitalize(&summary)).divider();

        out.field("Armor Class", entity.property("ac"))
            .field("Hit Points", entity.property("hp"))
            .field("Speed", entity.property("speed"));

        let scores = ability_line(entity);
        if !scores.is_empty() {
            out.divider().line(&scores).divider();
        }

        out.field("Saving Throws", entity.property("saves"))
            .field("Skills", entity.property("skills"))
            .field("Senses", entity.property("senses"))
            .field("Languages", entity.property("languages"))
            .field("Challenge", entity.property("cr"))
            .paragraphs(&entity.text);

        for block in &entity.blocks {
            out.subheading(&block.title);
            for entry in &block.entries {
                out.blank().line(&format!("{}. {}", entry.name.trim_end_matches('.'), entry.text.trim()));
            }
        }

        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TraitRenderer;

impl Renderer for TraitRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name)
            .field("Races", entity.property("races"))
            .paragraphs(&entity.text);
        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureRenderer;

impl Renderer for FeatureRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name);

        let class = entity.property("class");
        let level = entity.property("level").map(|l| format!("level {l}"));
        let summary = match (class, level) {
            (Some(class), Some(level)) => format!("{class} feature, {level}"),
            (Some(class), None) => format!("{class} feature"),
            (None, Some(level)) => capitalize(&level),
            (None, None) => String::new(),
        };

        out.line(&summary).paragraphs(&entity.text);
        source_footer(&mut out, entity);
        out.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceListRenderer;

impl Renderer for ReferenceListRenderer {
    fn render(&self, entity: &Entity) -> String {
        let mut out = Markup::new();
        out.heading(&entity.name).paragraphs(&entity.text).blank();
        for reference in &entity.references {
            out.line(&format!("• {}", reference.trim()));
        }
        out.finish()
    }
}

fn source_footer(out: &mut Markup, entity: &Entity) {
    if let Some(source) = entity.source.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        out.blank().field("Source", Some(source));
    }
}

/// `Evocation cantrip`, `3rd-level evocation (ritual)`.
fn spell_level_line(entity: &Entity) -> String {
    let school = entity.property("school");
    let level = entity.property("level").and_then(|l| l.parse::<u8>().ok());

    let mut line = match (level, school) {
        (Some(0), Some(school)) => format!("{} cantrip", capitalize(school)),
        (Some(0), None) => "Cantrip".to_string(),
        (Some(level), Some(school)) => format!("{}-level {}", ordinal(level), school.to_lowercase()),
        (Some(level), None) => format!("{}-level", ordinal(level)),
        (None, Some(school)) => capitalize(school),
        (None, None) => String::new(),
    };

    if entity.property("ritual").is_some_and(is_truthy) && !line.is_empty() {
        line.push_str(" (ritual)");
    }
    line
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Score modifier, rounding toward negative infinity. Computed in `i64` so
/// any parsed score is valid input.
fn ability_modifier(score: i32) -> i64 {
    (i64::from(score) - 10).div_euclid(2)
}

fn ability_line(entity: &Entity) -> String {
    ABILITIES
        .iter()
        .filter_map(|(key, label)| {
            let score = entity.property(key)?.parse::<i32>().ok()?;
            Some(format!("{label} {score} ({:+})", ability_modifier(score)))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn attunement(value: Option<&str>) -> Option<String> {
    let value = value?;
    if is_truthy(value) {
        Some("(requires attunement)".to_string())
    } else if is_falsy(value) {
        None
    } else {
        Some(format!("(requires attunement {value})"))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}

fn is_falsy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "false" | "no" | "0")
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(separator)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
