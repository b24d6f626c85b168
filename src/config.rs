use crate::error::{PuzzleError, PuzzleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    dimension: usize,
}

impl PuzzleConfig {
    pub fn new(dimension: usize) -> PuzzleResult<Self> {
        // Tiles are u32, so N² has to fit.
        let fits = dimension
            .checked_mul(dimension)
            .is_some_and(|cells| u32::try_from(cells).is_ok());
        if dimension == 0 || !fits {
            return Err(PuzzleError::InvalidDimension { dimension });
        }
        Ok(Self { dimension })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Where `tile` sits on a solved board, or `None` for the blank.
    pub fn goal_position(&self, tile: u32) -> Option<Position> {
        let offset = (tile as usize).checked_sub(1)?;
        Some(Position {
            row: offset / self.dimension,
            col: offset % self.dimension,
        })
    }

    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.dimension + pos.col
    }

    pub(crate) fn position(&self, index: usize) -> Position {
        Position {
            row: index / self.dimension,
            col: index % self.dimension,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Cap on expanded states; `None` runs until the goal is found.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    pub(crate) fn exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
