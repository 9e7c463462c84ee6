use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::force::Force;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameEvent {
    // Observers ask the game whose turn it is.
    SideChanged,
    GameOver { message: String },
}

// Read-only game state handed to observers together with each event.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub active_force: Force,
}

pub type Observer = Box<dyn FnMut(&GameEvent, &GameView)>;

// Synchronous in-process delivery, in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    observers: Vec<Observer>,
}

impl EventDispatcher {
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent, &GameView) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn emit(&mut self, event: &GameEvent, view: &GameView) {
        for observer in self.observers.iter_mut() {
            observer(event, view);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("num_observers", &self.observers.len())
            .finish()
    }
}
