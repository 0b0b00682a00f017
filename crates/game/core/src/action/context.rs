use crate::messages::MessageLog;
use crate::modal::ModalLayer;
use crate::state::{ActorId, Position};
use crate::turn::{TurnEvent, TurnResult};

/// Everything an action may touch while it is performed.
///
/// The orchestrator lends its map area, message log, modal slots and the
/// in-progress turn result for the duration of one `perform` call.
pub struct ActionContext<'a, M> {
    pub area: &'a mut M,
    pub messages: &'a mut MessageLog,
    pub modals: &'a mut ModalLayer,
    pub turn: &'a mut TurnResult,
    player: ActorId,
    player_dead: &'a mut bool,
}

impl<'a, M> ActionContext<'a, M> {
    pub fn new(
        area: &'a mut M,
        messages: &'a mut MessageLog,
        modals: &'a mut ModalLayer,
        turn: &'a mut TurnResult,
        player: ActorId,
        player_dead: &'a mut bool,
    ) -> Self {
        Self {
            area,
            messages,
            modals,
            turn,
            player,
            player_dead,
        }
    }

    pub fn player(&self) -> ActorId {
        self.player
    }

    pub fn is_player(&self, actor: ActorId) -> bool {
        actor == self.player
    }

    /// Raises the one-shot player-death signal sampled by the host.
    pub fn report_player_death(&mut self) {
        *self.player_dead = true;
    }

    pub fn add_event(&mut self, event: TurnEvent) {
        self.turn.add_event(event);
    }

    pub fn display_message(&mut self, message: impl Into<String>) {
        self.messages.add(message);
    }

    pub fn set_currently_looking_at(&mut self, position: Position, draw_actor: bool) {
        self.turn.set_current_look(position, draw_actor);
    }
}
