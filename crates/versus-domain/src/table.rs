//! Comparison table module - ordered score rows over a fixed entity set

use crate::{Dimension, Entity, EntityKey, Score};
use std::collections::HashMap;

/// One table row: a dimension plus the score awarded to each entity
///
/// Rows are expected to carry a score for every participating entity.
/// A missing entry is treated as zero at evaluation time (see
/// [`DimensionRow::score_for`]); the content validator reports holes
/// before they reach rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    dimension: Dimension,
    scores: HashMap<EntityKey, Score>,
}

impl DimensionRow {
    /// Build a row from a dimension and its per-entity scores
    pub fn new(dimension: Dimension, scores: impl IntoIterator<Item = (EntityKey, Score)>) -> Self {
        Self {
            dimension,
            scores: scores.into_iter().collect(),
        }
    }

    /// The axis this row scores
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Score for an entity, zero-filled when the row has no entry for it
    pub fn score_for(&self, key: &EntityKey) -> Score {
        self.scores.get(key).copied().unwrap_or_else(Score::zero)
    }

    /// Whether the row carries an explicit score for an entity
    pub fn has_score_for(&self, key: &EntityKey) -> bool {
        self.scores.contains_key(key)
    }
}

/// An ordered sequence of dimension rows over a fixed, ordered entity set
///
/// Entity order is significant twice over: it is the display order of
/// columns and the tie-break precedence for winner selection. Tables are
/// authored at build time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    entities: Vec<Entity>,
    rows: Vec<DimensionRow>,
}

impl ComparisonTable {
    /// Build a table from its ordered entities and rows
    pub fn new(entities: Vec<Entity>, rows: Vec<DimensionRow>) -> Self {
        Self { entities, rows }
    }

    /// The participating entities in canonical (tie-break) order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Canonical entity keys in tie-break order
    pub fn entity_order(&self) -> impl Iterator<Item = &EntityKey> + '_ {
        self.entities.iter().map(|e| &e.key)
    }

    /// The dimension rows in display order
    pub fn rows(&self) -> &[DimensionRow] {
        &self.rows
    }

    /// Look up an entity's display name by key
    pub fn display_name(&self, key: &EntityKey) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| &e.key == key)
            .map(|e| e.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, scores: &[(&str, f64)]) -> DimensionRow {
        DimensionRow::new(
            Dimension::new(label),
            scores
                .iter()
                .map(|(k, v)| (EntityKey::new(*k), Score::new(*v))),
        )
    }

    #[test]
    fn test_score_lookup() {
        let row = row("Editing power", &[("a", 8.0), ("b", 6.5)]);
        assert_eq!(row.score_for(&EntityKey::new("b")).value(), 6.5);
    }

    #[test]
    fn test_missing_score_is_zero() {
        let row = row("Editing power", &[("a", 8.0)]);
        assert!(!row.has_score_for(&EntityKey::new("b")));
        assert_eq!(row.score_for(&EntityKey::new("b")).value(), 0.0);
    }

    #[test]
    fn test_entity_order_is_preserved() {
        let table = ComparisonTable::new(
            vec![Entity::new("b", "B"), Entity::new("a", "A")],
            vec![],
        );
        let order: Vec<&str> = table.entity_order().map(EntityKey::as_str).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn test_display_name_lookup() {
        let table = ComparisonTable::new(vec![Entity::new("loom", "Loom")], vec![]);
        assert_eq!(table.display_name(&EntityKey::new("loom")), Some("Loom"));
        assert_eq!(table.display_name(&EntityKey::new("nope")), None);
    }
}
