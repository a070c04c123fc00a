pub mod constants;
pub mod shared_2048_game;
