//! Breadth-first solver. No visited set; positions reached along different
//! paths are expanded again.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::config::SearchLimits;
use crate::error::{PuzzleError, PuzzleResult};
use crate::puzzle::Board;
use crate::search::{SearchState, Solution};

pub fn solve(board: &Board, limits: &SearchLimits) -> PuzzleResult<Solution> {
    debug!("bfs: solving {}x{} board", board.dimension(), board.dimension());

    let mut frontier = VecDeque::new();
    frontier.push_back(SearchState::start(board));

    let mut expansions: u64 = 0;
    let mut max_frontier = frontier.len();

    while let Some(state) = frontier.pop_front() {
        if state.board.is_solved() {
            debug!(
                "bfs: solved in {} moves after {} expansions",
                state.path.len(),
                expansions
            );
            return Ok(Solution {
                moves: state.path,
                expansions,
                max_frontier,
            });
        }

        if limits.exhausted(expansions) {
            debug!("bfs: budget exhausted with {} states queued", frontier.len());
            return Err(PuzzleError::BudgetExhausted { expansions });
        }

        expansions += 1;
        trace!("bfs: expanding depth {}", state.path.len());
        frontier.extend(state.expand()?);
        max_frontier = max_frontier.max(frontier.len());
    }

    Err(PuzzleError::NotFound { expansions })
}
