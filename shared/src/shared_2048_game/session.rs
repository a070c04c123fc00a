use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::direction::Direction;
use super::moves::apply_move;
use super::persistence::{KeyValueStorage, Persistence};
use super::spawn::{init_board, spawn_random_tile};
use super::terminal::is_game_over;
use crate::constants::TARGET_TILE;

/// Everything that survives a page reload.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SaveState {
    pub board: Board,
    pub score: u32,
    #[serde(rename = "gameOver")]
    pub game_over: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
}

impl SaveState {
    pub fn fresh<R: Rng>(rng: &mut R) -> Self {
        let board = init_board(rng);
        Self {
            board,
            score: 0,
            game_over: is_game_over(&board),
        }
    }

    /// True for states a game can actually reach: a well-formed board with at
    /// least two tiles, nothing above the target tile, and a `game_over` flag
    /// that agrees with the board.
    pub fn is_consistent(&self) -> bool {
        self.board.is_well_formed()
            && self.board.tile_count() >= 2
            && self.board.max_tile() <= TARGET_TILE
            && self.game_over == is_game_over(&self.board)
    }

    /// Computes the state that follows `command`, or `None` when the command
    /// leaves the game as it is (a move after game over, or a blocked move).
    /// A tile is spawned only after a move that changed the board.
    pub fn reduce<R: Rng>(&self, command: Command, rng: &mut R) -> Option<SaveState> {
        match command {
            Command::Reset => Some(Self::fresh(rng)),
            Command::Move(_) if self.game_over => None,
            Command::Move(direction) => {
                let result = apply_move(&self.board, direction);
                if !result.moved {
                    return None;
                }
                let board = spawn_random_tile(&result.board, rng);
                Some(Self {
                    board,
                    score: self.score.saturating_add(result.score_gained),
                    game_over: is_game_over(&board),
                })
            }
        }
    }
}

/// Owns the live game: the current state, where it is saved, and the
/// randomness used for spawning. Commands are applied one at a time and each
/// accepted one replaces the state and writes it out exactly once.
pub struct GameSession<S, R> {
    state: SaveState,
    persistence: Persistence<S>,
    rng: R,
}

impl<S: KeyValueStorage, R: Rng> GameSession<S, R> {
    /// Resumes the saved game, or starts and saves a new one when nothing
    /// usable is stored.
    pub fn init(storage: S, mut rng: R) -> Self {
        let persistence = Persistence::new(storage);
        let state = match persistence.load() {
            Some(state) => {
                log::info!("Resumed saved game with score {}", state.score);
                state
            }
            None => {
                let state = SaveState::fresh(&mut rng);
                persistence.save(&state);
                log::info!("Started a new game");
                state
            }
        };
        Self {
            state,
            persistence,
            rng,
        }
    }

    pub fn snapshot(&self) -> &SaveState {
        &self.state
    }

    /// Applies `command` and returns whether the state changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match self.state.reduce(command, &mut self.rng) {
            Some(next) => {
                log::debug!("{:?} accepted, score {} -> {}", command, self.state.score, next.score);
                self.state = next;
                self.persistence.save(&self.state);
                true
            }
            None => false,
        }
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }
}
