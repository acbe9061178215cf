//! Ranking module - the deterministic comparison scorer
//!
//! Pure functions over a [`ComparisonTable`] producing a [`RankingResult`]:
//! per-dimension winners by first-wins-ties maximum scan, per-entity
//! averages across all rows, and the overall winner over those averages.
//! No I/O, no randomness, no state between calls; results are recomputed
//! fresh for every render rather than cached at load time.

use crate::{ComparisonTable, DimensionRow, EntityKey};
use thiserror::Error;

/// Errors from ranking a comparison table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// The table has no dimension rows, so averages are undefined
    #[error("comparison table has no dimension rows")]
    NoDimensions,

    /// The table has no entities, so there is nothing to rank
    #[error("comparison table has no entities")]
    NoEntities,
}

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;

/// The derived output of ranking one comparison table
///
/// Never persisted; computed per call from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    dimension_winners: Vec<EntityKey>,
    averages: Vec<(EntityKey, f64)>,
    overall_winner: EntityKey,
}

impl RankingResult {
    /// Winning entity key per dimension row, parallel to the table's rows
    pub fn dimension_winners(&self) -> &[EntityKey] {
        &self.dimension_winners
    }

    /// Per-entity average score, in canonical entity order
    pub fn averages(&self) -> &[(EntityKey, f64)] {
        &self.averages
    }

    /// Average score for one entity, if it participates in the comparison
    pub fn average_for(&self, key: &EntityKey) -> Option<f64> {
        self.averages
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, avg)| *avg)
    }

    /// The entity with the highest average (earliest-ordered on ties)
    pub fn overall_winner(&self) -> &EntityKey {
        &self.overall_winner
    }
}

/// Winning entity for one dimension row
///
/// Scans entities in tie-break order tracking the maximum score seen so
/// far; only a strictly greater score replaces the current winner, so the
/// earliest-ordered entity wins ties. Entities missing from the row score
/// zero. Returns `None` only for an empty entity order.
pub fn winner_for_dimension<'a>(
    row: &DimensionRow,
    entity_order: &'a [EntityKey],
) -> Option<&'a EntityKey> {
    let mut best: Option<(&EntityKey, f64)> = None;
    for key in entity_order {
        let score = row.score_for(key).value();
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((key, score)),
        }
    }
    best.map(|(key, _)| key)
}

/// Arithmetic mean of one entity's scores across every dimension row
///
/// The divisor is the row count, not the number of rows mentioning the
/// entity; rows without an entry contribute zero. Returns `None` when the
/// table has no rows, since the mean is undefined there.
pub fn average_for_entity(key: &EntityKey, table: &ComparisonTable) -> Option<f64> {
    let rows = table.rows();
    if rows.is_empty() {
        return None;
    }

    let sum: f64 = rows.iter().map(|row| row.score_for(key).value()).sum();
    Some(sum / rows.len() as f64)
}

/// Overall winner: first-wins-ties maximum scan over per-entity averages
pub fn overall_winner<'a>(
    table: &ComparisonTable,
    entity_order: &'a [EntityKey],
) -> Result<&'a EntityKey> {
    let mut best: Option<(&EntityKey, f64)> = None;
    for key in entity_order {
        let average = average_for_entity(key, table).ok_or(RankingError::NoDimensions)?;
        match best {
            Some((_, top)) if average <= top => {}
            _ => best = Some((key, average)),
        }
    }

    best.map(|(key, _)| key).ok_or(RankingError::NoEntities)
}

/// Rank a full comparison table
///
/// Computes every per-dimension winner, every per-entity average, and the
/// overall winner in one pass over the table.
pub fn rank(table: &ComparisonTable) -> Result<RankingResult> {
    let entity_order: Vec<EntityKey> = table.entity_order().cloned().collect();
    if entity_order.is_empty() {
        return Err(RankingError::NoEntities);
    }
    if table.rows().is_empty() {
        return Err(RankingError::NoDimensions);
    }

    let dimension_winners = table
        .rows()
        .iter()
        .map(|row| {
            winner_for_dimension(row, &entity_order)
                .cloned()
                .expect("entity order checked non-empty")
        })
        .collect();

    let averages: Vec<(EntityKey, f64)> = entity_order
        .iter()
        .map(|key| {
            let avg = average_for_entity(key, table).expect("rows checked non-empty");
            (key.clone(), avg)
        })
        .collect();

    let overall_winner = overall_winner(table, &entity_order)?.clone();

    Ok(RankingResult {
        dimension_winners,
        averages,
        overall_winner,
    })
}
