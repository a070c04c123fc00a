use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_2048_game::{Command, GameSession, SaveState};
use yew::prelude::*;

use crate::storage::BrowserStorage;

pub type BrowserSession = GameSession<BrowserStorage, SmallRng>;

#[derive(Clone)]
pub struct UseGameSessionHandle {
    snapshot: UseStateHandle<SaveState>,
    session: Rc<RefCell<BrowserSession>>,
}

impl UseGameSessionHandle {
    pub fn snapshot(&self) -> SaveState {
        *self.snapshot
    }

    /// Runs `command` against the session and re-renders if it was accepted.
    pub fn dispatch(&self, command: Command) {
        let mut session = self.session.borrow_mut();
        if session.dispatch(command) {
            self.snapshot.set(*session.snapshot());
        }
    }
}

#[hook]
pub fn use_game_session() -> UseGameSessionHandle {
    let session = use_mut_ref(|| {
        GameSession::init(BrowserStorage::local(), SmallRng::from_entropy())
    });
    let snapshot = {
        let session = session.clone();
        use_state(move || *session.borrow().snapshot())
    };

    UseGameSessionHandle { snapshot, session }
}
