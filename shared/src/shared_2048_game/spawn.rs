use rand::seq::SliceRandom;
use rand::Rng;

use super::board::Board;
use crate::constants::SPAWN_TWO_PROBABILITY;

/// Places a 2 (90%) or a 4 (10%) on an empty cell chosen uniformly among the
/// empty cells. A full board comes back unchanged.
pub fn spawn_random_tile<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let empties = board.empty_cells();
    let Some(&cell) = empties.choose(rng) else {
        return *board;
    };
    let value = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };
    board.with_tile(cell, value)
}

/// An empty board with two spawned tiles.
pub fn init_board<R: Rng>(rng: &mut R) -> Board {
    let board = spawn_random_tile(&Board::empty(), rng);
    spawn_random_tile(&board, rng)
}
