/// Width and height of the square board.
pub const BOARD_SIZE: usize = 4;

/// Reaching a tile of this value ends the game. This variant stops at 128.
pub const TARGET_TILE: u32 = 128;

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Key under which the save state lives in local storage.
pub const STORAGE_KEY: &str = "merge128.save";
