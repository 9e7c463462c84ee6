use crate::event::GameEvent;
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnController {
    active_force: Force,
}

impl TurnController {
    pub fn new(first_to_move: Force) -> Self { TurnController { active_force: first_to_move } }

    pub fn active_force(&self) -> Force { self.active_force }

    pub fn change_side(&mut self) -> GameEvent {
        self.active_force = self.active_force.opponent();
        GameEvent::SideChanged
    }
}
