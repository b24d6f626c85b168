use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PuzzleResult;
use crate::puzzle::Board;

/// Applies `density` random legal moves to `board` and returns them in order.
///
/// Only legal slides are used, so a board shuffled from solved stays
/// solvable. A move may undo the one before it.
pub fn shuffle<R: Rng + ?Sized>(
    board: &mut Board,
    density: usize,
    rng: &mut R,
) -> PuzzleResult<Vec<u32>> {
    let mut applied = Vec::with_capacity(density);

    for _ in 0..density {
        let allowed = board.allowed_moves()?;
        if allowed.len() <= 1 {
            continue;
        }
        if let Some(&tile) = allowed.choose(rng) {
            board.apply_move(tile)?;
            applied.push(tile);
        }
    }

    trace!("shuffle: applied {:?}", applied);
    Ok(applied)
}
