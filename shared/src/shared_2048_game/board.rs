use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// One row or column of the board.
pub type Line = [u32; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square grid of tiles where `0` marks an empty cell.
///
/// Boards are plain values: every move produces a new board and leaves the
/// one it was computed from untouched. Serializes as a nested array of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Line; BOARD_SIZE],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub const fn from_rows(cells: [Line; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Line; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[cell.row][cell.col]
    }

    /// Returns a copy of this board with a single cell replaced.
    pub fn with_tile(mut self, cell: Cell, value: u32) -> Self {
        self.set(cell, value);
        self
    }

    pub(crate) fn set(&mut self, cell: Cell, value: u32) {
        self.cells[cell.row][cell.col] = value;
    }

    /// All tile values in row-major order, empty cells included.
    pub fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    cells.push(Cell::new(row, col));
                }
            }
        }
        cells
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().filter(|&value| value != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.tiles().max().unwrap_or(0)
    }

    /// True when every cell is empty or a power of two no smaller than 2.
    pub fn is_well_formed(&self) -> bool {
        self.tiles()
            .all(|value| value == 0 || (value >= 2 && value.is_power_of_two()))
    }
}

impl From<[Line; BOARD_SIZE]> for Board {
    fn from(cells: [Line; BOARD_SIZE]) -> Self {
        Self::from_rows(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for value in row {
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_lists_every_cell_in_row_major_order() {
        let cells = Board::empty().empty_cells();
        assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[BOARD_SIZE], Cell::new(1, 0));
        assert_eq!(cells.last(), Some(&Cell::new(BOARD_SIZE - 1, BOARD_SIZE - 1)));
    }

    #[test]
    fn test_empty_cells_skip_occupied() {
        let board = Board::from_rows([
            [2, 0, 4, 0],
            [0, 8, 0, 0],
            [2, 2, 2, 2],
            [0, 0, 0, 16],
        ]);
        assert_eq!(
            board.empty_cells(),
            vec![
                Cell::new(0, 1),
                Cell::new(0, 3),
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(3, 0),
                Cell::new(3, 1),
                Cell::new(3, 2),
            ]
        );
        assert_eq!(board.tile_count(), 8);
        assert_eq!(board.max_tile(), 16);
    }

    #[test]
    fn test_with_tile_leaves_original_untouched() {
        let original = Board::empty();
        let changed = original.with_tile(Cell::new(2, 3), 4);
        assert_eq!(original, Board::empty());
        assert_eq!(changed.get(Cell::new(2, 3)), 4);
        assert_eq!(changed.tile_count(), 1);
    }

    #[test]
    fn test_well_formed_rejects_non_powers_of_two() {
        assert!(Board::empty().is_well_formed());
        assert!(Board::empty().with_tile(Cell::new(0, 0), 1024).is_well_formed());
        assert!(!Board::empty().with_tile(Cell::new(0, 0), 1).is_well_formed());
        assert!(!Board::empty().with_tile(Cell::new(1, 1), 6).is_well_formed());
    }

    #[test]
    fn test_serializes_as_nested_rows() {
        let board = Board::empty().with_tile(Cell::new(0, 1), 2);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[0,2,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_rejects_wrong_dimensions() {
        assert!(serde_json::from_str::<Board>("[[0,2,0],[0,0,0],[0,0,0]]").is_err());
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let board = Board::empty().with_tile(Cell::new(0, 0), 8);
        let text = board.to_string();
        assert!(text.starts_with("    8    ."));
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
