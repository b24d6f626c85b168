use std::io;

#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    #[error("invariant violated: board has no blank cell")]
    InvariantViolation,

    #[error("invalid puzzle dimension {dimension}")]
    InvalidDimension { dimension: usize },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("tile {tile} is not adjacent to the blank")]
    IllegalMove { tile: u32 },

    /// The frontier emptied without reaching the goal.
    #[error("no solution found after {expansions} expansions")]
    NotFound { expansions: u64 },

    #[error("search budget exhausted after {expansions} expansions")]
    BudgetExhausted { expansions: u64 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
