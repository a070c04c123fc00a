//! Engine for a 4x4 sliding-tile merge game that ends at the 128 tile.
//!
//! Moves, line reduction and terminal checks are pure functions over
//! [`Board`] values. Randomness only enters through [`spawn_random_tile`],
//! which takes the generator as an argument, and [`GameSession`] ties the
//! pieces to a [`KeyValueStorage`] for saving.

pub mod board;
pub mod direction;
pub mod line;
pub mod moves;
pub mod persistence;
pub mod session;
pub mod spawn;
pub mod terminal;

pub use board::{Board, Cell, Line};
pub use direction::{Direction, ParseDirectionError};
pub use line::{reduce_line, LineReduction};
pub use moves::{apply_move, legal_directions, MoveResult};
pub use persistence::{KeyValueStorage, MemoryStorage, Persistence, StorageError};
pub use session::{Command, GameSession, SaveState};
pub use spawn::{init_board, spawn_random_tile};
pub use terminal::{has_legal_move, is_game_over, reached_target};
