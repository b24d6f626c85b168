//! Sliding tile puzzle solver.
//!
//! Exposes the board representation, the Manhattan heuristic, the shuffler
//! and the breadth-first and greedy solvers used by the `slide-search`
//! binary.

pub mod config;
pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod search;
pub mod shuffle;

pub use config::{Position, PuzzleConfig, SearchLimits};
pub use error::{PuzzleError, PuzzleResult};
pub use heuristic::manhattan_distance;
pub use puzzle::{Board, Direction};
pub use search::{SearchState, Solution, Strategy};
pub use shuffle::shuffle;
