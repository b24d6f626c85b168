pub mod bfs;
pub mod greedy;

use crate::config::SearchLimits;
use crate::error::PuzzleResult;
use crate::puzzle::Board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub board: Board,
    pub path: Vec<u32>,
    pub last_move: Option<u32>,
}

impl SearchState {
    pub fn start(board: &Board) -> Self {
        Self {
            board: board.clone(),
            path: Vec::new(),
            last_move: None,
        }
    }

    /// Returns false, leaving the state untouched, when the move is illegal.
    pub fn apply_move(&mut self, tile: u32) -> PuzzleResult<bool> {
        if self.board.apply_move(tile)?.is_none() {
            return Ok(false);
        }
        self.path.push(tile);
        self.last_move = Some(tile);
        Ok(true)
    }

    /// Children in `allowed_moves` order, minus the one undoing `last_move`.
    pub fn expand(&self) -> PuzzleResult<Vec<SearchState>> {
        let mut children = Vec::with_capacity(4);

        for tile in self.board.allowed_moves()? {
            if Some(tile) == self.last_move {
                continue;
            }
            let mut child = self.clone();
            child.apply_move(tile)?;
            children.push(child);
        }
        Ok(children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<u32>,
    pub expansions: u64,
    pub max_frontier: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Backward-scanning best-first search, fast but not optimal.
    Greedy,
    /// Breadth-first search, returns a shortest path.
    #[value(name = "bfs")]
    BreadthFirst,
}

impl Strategy {
    pub fn from_mode_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Strategy::Greedy),
            'B' | 'b' => Some(Strategy::BreadthFirst),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::BreadthFirst => "breadth-first",
        }
    }

    pub fn solve(&self, board: &Board, limits: &SearchLimits) -> PuzzleResult<Solution> {
        match self {
            Strategy::Greedy => greedy::solve(board, limits),
            Strategy::BreadthFirst => bfs::solve(board, limits),
        }
    }
}
