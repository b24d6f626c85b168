use crate::puzzle::Board;

/// Sum of row and column offsets of every tile from its goal cell.
pub fn manhattan_distance(board: &Board) -> usize {
    let config = board.config();

    board
        .cells()
        .filter_map(|(pos, tile)| {
            let goal = config.goal_position(tile)?;
            Some(pos.row.abs_diff(goal.row) + pos.col.abs_diff(goal.col))
        })
        .sum()
}
