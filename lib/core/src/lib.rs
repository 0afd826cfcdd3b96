//! # nbhdfit Core
//!
//! Core library shared by the nbhdfit scorer and ranker.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Dimension`] - The eight lifestyle axes and their keyword dictionary
//! - [`Vector`] - A score or preference vector in dimension order
//! - [`NeighbourhoodScores`] - One neighbourhood with a 0-100 score per dimension
//! - [`ScoreTable`] - The persisted table handed from the scorer to the ranker
//!
//! ## Example
//!
//! ```rust
//! use nbhdfit_core::{Dimension, NeighbourhoodScores, ScoreTable};
//!
//! let table = ScoreTable::new(vec![
//!     NeighbourhoodScores::new("Gràcia", [72.0, 64.5, 80.0, 61.0, 77.0, 70.0, 68.0, 59.0]),
//! ])
//! .unwrap();
//!
//! let row = table.get("Gràcia").unwrap();
//! assert_eq!(row.score(Dimension::Walkability), 80.0);
//! ```

pub mod dimension;
pub mod error;
pub mod table;
pub mod vector;

pub use dimension::{contains_keyword, Dimension, DIMENSION_COUNT};
pub use error::{Error, Result};
pub use table::{NeighbourhoodScores, ScoreTable, NEIGHBOURHOOD_COLUMN, SCORE_RANGE};
pub use vector::{round1, Vector, NORM_EPSILON};
