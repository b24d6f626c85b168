use std::fmt;

use crate::config::{Position, PuzzleConfig};
use crate::error::{PuzzleError, PuzzleResult};

/// The way the blank travels when a tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Neighbours of the blank in row-major order.
    const ROW_MAJOR: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "blank up",
            Direction::Down => "blank down",
            Direction::Left => "blank left",
            Direction::Right => "blank right",
        })
    }
}

/// Row-major N×N buffer; always a permutation of `0..N²` with `0` as the blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: PuzzleConfig,
    tiles: Vec<u32>,
}

impl Board {
    pub fn solved(config: PuzzleConfig) -> Self {
        let cells = config.cell_count();
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0); // The empty space is represented by 0

        Self { config, tiles }
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> PuzzleResult<Self> {
        let config = PuzzleConfig::new(rows.len())?;
        let dimension = config.dimension();

        if let Some(bad) = rows.iter().position(|row| row.len() != dimension) {
            return Err(PuzzleError::InvalidBoard {
                reason: format!(
                    "row {} has {} cells, expected {}",
                    bad,
                    rows[bad].len(),
                    dimension
                ),
            });
        }

        let tiles: Vec<u32> = rows.into_iter().flatten().collect();
        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            match seen.get_mut(tile as usize) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(PuzzleError::InvalidBoard {
                        reason: format!("tile {} appears more than once", tile),
                    })
                }
                None => {
                    return Err(PuzzleError::InvalidBoard {
                        reason: format!("tile {} is out of range", tile),
                    })
                }
            }
        }

        Ok(Self { config, tiles })
    }

    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    pub fn dimension(&self) -> usize {
        self.config.dimension()
    }

    pub fn tile_at(&self, pos: Position) -> u32 {
        self.tiles[self.config.index(pos)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.dimension())
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, &tile)| (self.config.position(index), tile))
    }

    pub fn blank_position(&self) -> PuzzleResult<Position> {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .map(|index| self.config.position(index))
            .ok_or(PuzzleError::InvariantViolation)
    }

    fn neighbour(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.as_offset();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let dimension = self.dimension();

        if row < dimension && col < dimension {
            Some(Position { row, col })
        } else {
            None
        }
    }

    pub fn legal_move(&self, tile: u32) -> PuzzleResult<Option<Direction>> {
        let blank = self.blank_position()?;
        let moves = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        Ok(moves.into_iter().find(|&dir| {
            self.neighbour(blank, dir)
                .is_some_and(|pos| self.tile_at(pos) == tile)
        }))
    }

    /// An illegal move leaves the board untouched and returns `None`.
    pub fn apply_move(&mut self, tile: u32) -> PuzzleResult<Option<Direction>> {
        let Some(dir) = self.legal_move(tile)? else {
            return Ok(None);
        };

        let blank = self.blank_position()?;
        if let Some(target) = self.neighbour(blank, dir) {
            let from = self.config.index(blank);
            let to = self.config.index(target);
            self.tiles.swap(from, to);
        }
        Ok(Some(dir))
    }

    pub fn allowed_moves(&self) -> PuzzleResult<Vec<u32>> {
        let blank = self.blank_position()?;

        Ok(Direction::ROW_MAJOR
            .iter()
            .filter_map(|&dir| self.neighbour(blank, dir))
            .map(|pos| self.tile_at(pos))
            .collect())
    }

    pub fn replay(&mut self, moves: &[u32]) -> PuzzleResult<()> {
        for &tile in moves {
            if self.apply_move(tile)?.is_none() {
                return Err(PuzzleError::IllegalMove { tile });
            }
        }
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.cells().all(|(pos, tile)| {
            self.config
                .goal_position(tile)
                .map_or(true, |goal| goal == pos)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{:>4}", val)?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn solved_board_layout() {
        let b = Board::solved(PuzzleConfig::new(3).unwrap());
        let rows: Vec<Vec<u32>> = b.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        assert!(b.is_solved());
        assert_eq!(b.blank_position().unwrap(), Position { row: 2, col: 2 });
    }

    #[test]
    fn from_rows_rejects_malformed_input() {
        assert!(matches!(
            Board::from_rows(vec![]),
            Err(PuzzleError::InvalidDimension { dimension: 0 })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 2], vec![0]]),
            Err(PuzzleError::InvalidBoard { .. })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 1], vec![3, 0]]),
            Err(PuzzleError::InvalidBoard { .. })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 2], vec![4, 0]]),
            Err(PuzzleError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn legal_move_reports_blank_direction() {
        // Blank in the centre of a 3x3 board.
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        assert_eq!(b.legal_move(2).unwrap(), Some(Direction::Up));
        assert_eq!(b.legal_move(5).unwrap(), Some(Direction::Down));
        assert_eq!(b.legal_move(4).unwrap(), Some(Direction::Left));
        assert_eq!(b.legal_move(6).unwrap(), Some(Direction::Right));
        assert_eq!(b.legal_move(1).unwrap(), None);
        assert_eq!(b.legal_move(0).unwrap(), None);
    }

    #[test]
    fn allowed_moves_are_row_major() {
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        assert_eq!(b.allowed_moves().unwrap(), vec![2, 4, 6, 5]);

        let corner = Board::solved(PuzzleConfig::new(3).unwrap());
        assert_eq!(corner.allowed_moves().unwrap(), vec![6, 8]);

        let single = Board::solved(PuzzleConfig::new(1).unwrap());
        assert!(single.allowed_moves().unwrap().is_empty());
    }

    #[test]
    fn apply_move_swaps_tile_and_blank() {
        let mut b = Board::solved(PuzzleConfig::new(3).unwrap());
        let dir = b.apply_move(8).unwrap().unwrap();
        assert_eq!(dir, Direction::Left);
        assert_eq!(dir.to_string(), "blank left");
        assert_eq!(b.tile_at(Position { row: 2, col: 2 }), 8);
        assert_eq!(b.blank_position().unwrap(), Position { row: 2, col: 1 });
        assert!(!b.is_solved());
    }

    #[test]
    fn illegal_move_is_a_no_op() {
        let mut b = Board::solved(PuzzleConfig::new(3).unwrap());
        let before = b.clone();
        assert_eq!(b.apply_move(1).unwrap(), None);
        assert_eq!(b, before);
    }

    #[test]
    fn sliding_a_tile_back_restores_the_board() {
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        for tile in b.allowed_moves().unwrap() {
            let mut moved = b.clone();
            let (dr, dc) = moved.apply_move(tile).unwrap().unwrap().as_offset();
            assert_ne!(moved, b);
            let back = moved.apply_move(tile).unwrap().unwrap();
            assert_eq!(back.as_offset(), (-dr, -dc));
            assert_eq!(moved, b);
        }
    }

    #[test]
    fn replay_stops_on_illegal_tile() {
        let mut b = Board::solved(PuzzleConfig::new(3).unwrap());
        b.replay(&[8, 5]).unwrap();
        assert_eq!(b.blank_position().unwrap(), Position { row: 1, col: 1 });

        let err = b.replay(&[9]).unwrap_err();
        assert!(matches!(err, PuzzleError::IllegalMove { tile: 9 }));
    }

    #[test]
    fn display_right_aligns_tiles() {
        let b = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(b.to_string(), "   1   2\n\n   3   0\n\n");
    }
}
