//! Versus Domain Layer
//!
//! Core domain model for the Versus comparison-page engine: the types that
//! describe a comparison (dimensions, entities, scores, tables) and the
//! deterministic scorer that ranks them.
//!
//! ## Key Concepts
//!
//! - **Dimension**: one named axis of comparison (e.g. "Editing power")
//! - **Entity**: one of the competing subjects, identified by a stable key
//! - **Score**: a numeric rating in [0, 10] for one entity on one dimension
//! - **ComparisonTable**: ordered dimension rows over an ordered entity set
//! - **RankingResult**: derived per-dimension winners, per-entity averages,
//!   and the overall winner; computed fresh per render, never stored
//!
//! ## Architecture
//!
//! Pure business logic only: no I/O, no global state, no randomness.
//! Content loading and rendering live in other crates and depend on this
//! one, never the other way around.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dimension;
pub mod entity;
pub mod ranking;
pub mod score;
pub mod table;

// Re-exports for convenience
pub use dimension::Dimension;
pub use entity::{Entity, EntityKey};
pub use ranking::{
    average_for_entity, overall_winner, rank, winner_for_dimension, RankingError, RankingResult,
};
pub use score::{format_one_decimal, Score, MAX_SCORE, MIN_SCORE};
pub use table::{ComparisonTable, DimensionRow};
