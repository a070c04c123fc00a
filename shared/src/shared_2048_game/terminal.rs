use crate::constants::{BOARD_SIZE, TARGET_TILE};

use super::board::Board;

pub fn reached_target(board: &Board) -> bool {
    board.tiles().any(|value| value >= TARGET_TILE)
}

/// True while some move could still change the board: an empty cell exists,
/// or two equal tiles touch horizontally or vertically.
pub fn has_legal_move(board: &Board) -> bool {
    let rows = board.rows();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = rows[row][col];
            if value == 0 {
                return true;
            }
            if col + 1 < BOARD_SIZE && rows[row][col + 1] == value {
                return true;
            }
            if row + 1 < BOARD_SIZE && rows[row + 1][col] == value {
                return true;
            }
        }
    }
    false
}

pub fn is_game_over(board: &Board) -> bool {
    reached_target(board) || !has_legal_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_2048_game::board::Cell;
    use crate::shared_2048_game::moves::legal_directions;

    fn checkerboard() -> Board {
        Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
    }

    #[test]
    fn test_frozen_board_is_game_over() {
        let board = checkerboard();
        assert!(!has_legal_move(&board));
        assert!(!reached_target(&board));
        assert!(is_game_over(&board));
        assert!(legal_directions(&board).is_empty());
    }

    #[test]
    fn test_empty_cell_keeps_game_alive() {
        let board = checkerboard().with_tile(Cell::new(3, 3), 0);
        assert!(has_legal_move(&board));
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_adjacent_pair_keeps_game_alive() {
        let horizontal = checkerboard().with_tile(Cell::new(1, 1), 4);
        assert!(has_legal_move(&horizontal));

        let vertical = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 4, 8],
        ]);
        assert!(has_legal_move(&vertical));
        assert!(!is_game_over(&vertical));
    }

    #[test]
    fn test_target_tile_ends_game() {
        let board = Board::empty()
            .with_tile(Cell::new(0, 0), TARGET_TILE)
            .with_tile(Cell::new(0, 1), 2);
        assert!(has_legal_move(&board));
        assert!(reached_target(&board));
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_tile_below_target_does_not_end_game() {
        let board = Board::empty().with_tile(Cell::new(2, 2), 64);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_tileless_board_has_a_legal_move_but_nothing_slides() {
        assert!(has_legal_move(&Board::empty()));
        assert!(legal_directions(&Board::empty()).is_empty());
    }

    #[test]
    fn test_legal_move_matches_move_engine() {
        let boards = [
            checkerboard(),
            checkerboard().with_tile(Cell::new(0, 0), 0),
            checkerboard().with_tile(Cell::new(2, 3), 2),
            Board::empty().with_tile(Cell::new(1, 1), 2),
        ];
        for board in boards {
            assert!(board.tile_count() > 0);
            assert_eq!(has_legal_move(&board), !legal_directions(&board).is_empty());
        }
    }
}
