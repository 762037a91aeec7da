//! Fuzzy matching of catalog names against the user query.

use crate::domain::{Entity, HighlightSpan, SearchResult};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::rc::Rc;

/// Searches the catalog and returns results in rank order.
///
/// An empty (or whitespace-only) query returns every entity in catalog order
/// with no highlighting. Otherwise each whitespace-separated token must
/// fuzzy-match the entity name; the token scores are summed and results are
/// sorted by descending score. Ties keep catalog order.
///
/// # Examples
///
/// ```
/// use lorekeeper::domain::{Entity, EntityKind};
/// use lorekeeper::search::search_catalog;
/// use std::rc::Rc;
///
/// let catalog = vec![
///     Rc::new(Entity::new("Fireball", EntityKind::Spell)),
///     Rc::new(Entity::new("Shield", EntityKind::Spell)),
/// ];
///
/// let results = search_catalog(&catalog, "fire");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name(), "Fireball");
/// ```
#[must_use]
pub fn search_catalog(catalog: &[Rc<Entity>], query: &str) -> Vec<SearchResult> {
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let _span = tracing::debug_span!(
        "search_catalog",
        catalog_size = catalog.len(),
        token_count = tokens.len()
    )
    .entered();

    if tokens.is_empty() {
        return catalog.iter().cloned().map(SearchResult::plain).collect();
    }

    let matcher = SkimMatcherV2::default().ignore_case();

    let mut scored: Vec<(i64, SearchResult)> = catalog
        .iter()
        .filter_map(|entity| {
            let (score, indices) = match_tokens(&matcher, &entity.name, &tokens)?;
            Some((score, SearchResult::new(Rc::clone(entity), coalesce(indices))))
        })
        .collect();

    // sort_by is stable, so equal scores keep catalog order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(match_count = scored.len(), "search complete");

    scored.into_iter().map(|(_, result)| result).collect()
}

/// Matches every token against `name`, returning the summed score and the
/// union of matched character indices.
fn match_tokens(matcher: &SkimMatcherV2, name: &str, tokens: &[&str]) -> Option<(i64, Vec<usize>)> {
    let mut total = 0;
    let mut indices = Vec::new();

    for token in tokens {
        let (score, matched) = matcher.fuzzy_indices(name, token)?;
        total += score;
        indices.extend(matched);
    }

    indices.sort_unstable();
    indices.dedup();
    Some((total, indices))
}

/// Collapses sorted character indices into contiguous half-open spans.
///
/// `[0, 1, 2, 5, 6]` becomes `[0..3, 5..7]`.
#[must_use]
pub fn coalesce(indices: Vec<usize>) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for idx in indices {
        run = match run {
            Some((start, prev)) if idx == prev + 1 => Some((start, idx)),
            Some((start, prev)) => {
                spans.extend(HighlightSpan::new(start, prev + 1));
                Some((idx, idx))
            }
            None => Some((idx, idx)),
        };
    }

    if let Some((start, prev)) = run {
        spans.extend(HighlightSpan::new(start, prev + 1));
    }

    spans
}
