//! Greedy best-first solver.
//!
//! The frontier is a plain `Vec` scanned from the back, scoring each state
//! as Manhattan distance plus path length. The scan stops at the first new
//! minimum that beats the previous iteration's pick, otherwise it takes the
//! lowest cost seen. Not optimal and not guaranteed to terminate.

use log::{debug, trace};

use crate::config::SearchLimits;
use crate::error::{PuzzleError, PuzzleResult};
use crate::heuristic::manhattan_distance;
use crate::puzzle::Board;
use crate::search::{SearchState, Solution};

fn cost(state: &SearchState) -> usize {
    manhattan_distance(&state.board) + state.path.len()
}

// Index 0 is never scored; it is only picked when nothing else is scanned.
fn select(frontier: &[SearchState], last_shortest: Option<usize>) -> (usize, Option<usize>) {
    let mut selected = 0;
    let mut shortest: Option<usize> = None;

    for i in (1..frontier.len()).rev() {
        let dist = cost(&frontier[i]);
        if shortest.map_or(true, |s| dist < s) {
            shortest = Some(dist);
            selected = i;
            if last_shortest.map_or(true, |last| dist < last) {
                break;
            }
        }
    }

    (selected, shortest)
}

pub fn solve(board: &Board, limits: &SearchLimits) -> PuzzleResult<Solution> {
    debug!(
        "greedy: solving {}x{} board",
        board.dimension(),
        board.dimension()
    );

    let mut frontier = vec![SearchState::start(board)];
    let mut last_shortest: Option<usize> = None;

    let mut expansions: u64 = 0;
    let mut max_frontier = frontier.len();

    while !frontier.is_empty() {
        let (index, shortest) = select(&frontier, last_shortest);
        last_shortest = shortest;

        let state = frontier.remove(index);

        if state.board.is_solved() {
            debug!(
                "greedy: solved in {} moves after {} expansions",
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
            debug!("greedy: budget exhausted with {} states queued", frontier.len());
            return Err(PuzzleError::BudgetExhausted { expansions });
        }

        expansions += 1;
        trace!("greedy: expanding index {} at cost {:?}", index, shortest);
        frontier.extend(state.expand()?);
        max_frontier = max_frontier.max(frontier.len());
    }

    Err(PuzzleError::NotFound { expansions })
}
