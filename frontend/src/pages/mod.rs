pub mod frontend_2048_game;
