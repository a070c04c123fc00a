use crate::constants::BOARD_SIZE;

use super::board::{Board, Cell, Line};
use super::direction::Direction;
use super::line::reduce_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub score_gained: u32,
    pub moved: bool,
}

/// Maps the `offset`-th tile of line `index` to a board cell, with offset 0
/// sitting on the edge the tiles are pushed against. Right and down read
/// their lines back to front, which is the reverse-reduce-reverse scheme.
fn cell_at(direction: Direction, index: usize, offset: usize) -> Cell {
    let last = BOARD_SIZE - 1;
    match direction {
        Direction::Left => Cell::new(index, offset),
        Direction::Right => Cell::new(index, last - offset),
        Direction::Up => Cell::new(offset, index),
        Direction::Down => Cell::new(last - offset, index),
    }
}

fn read_line(board: &Board, direction: Direction, index: usize) -> Line {
    std::array::from_fn(|offset| board.get(cell_at(direction, index, offset)))
}

/// Slides every row or column towards `direction`.
///
/// The input board is never modified. When nothing moves the returned board
/// equals the input and `score_gained` is 0. No tile is spawned here.
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let mut next = *board;
    let mut score_gained: u32 = 0;
    let mut moved = false;

    for index in 0..BOARD_SIZE {
        let original = read_line(board, direction, index);
        let reduction = reduce_line(original);
        score_gained = score_gained.saturating_add(reduction.gained);
        if reduction.line != original {
            moved = true;
            for (offset, &value) in reduction.line.iter().enumerate() {
                next.set(cell_at(direction, index, offset), value);
            }
        }
    }

    MoveResult {
        board: next,
        score_gained,
        moved,
    }
}

/// Directions in which a move would change the board.
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| apply_move(board, direction).moved)
        .collect()
}
