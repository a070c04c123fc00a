use crate::constants::BOARD_SIZE;

use super::board::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReduction {
    pub line: Line,
    pub gained: u32,
}

/// Slides a line towards index 0 and merges equal neighbours.
///
/// Zeros are dropped first, then the remaining tiles are scanned from the
/// front: two equal neighbours become one tile holding their sum and the scan
/// resumes after both, so a tile merges at most once per move. The line is
/// padded back with zeros. `gained` is the sum of all merged tiles. Sums
/// saturate at `u32::MAX`.
pub fn reduce_line(line: Line) -> LineReduction {
    let tiles: Vec<u32> = line.iter().copied().filter(|&value| value != 0).collect();
    let mut next = [0; BOARD_SIZE];
    let mut gained: u32 = 0;
    let mut write = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i].saturating_add(tiles[i + 1]);
            next[write] = merged;
            gained = gained.saturating_add(merged);
            i += 2;
        } else {
            next[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }
    LineReduction { line: next, gained }
}
