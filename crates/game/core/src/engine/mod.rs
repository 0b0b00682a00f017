//! Turn orchestration.
//!
//! [`Game`] owns the action queue, the modal slots and the turn result for
//! the map area in play. A host calls [`Game::process_turn`] once per tick;
//! each call either feeds input to a waiting modal or runs the scheduling
//! loop until the player has acted, an actor is still deciding, or the
//! player died.

mod chain;
mod errors;
mod schedule;

use std::collections::VecDeque;

use tracing::info;

pub use errors::EngineError;

use crate::action::BoxedAction;
use crate::config::GameConfig;
use crate::map::MapArea;
use crate::messages::MessageLog;
use crate::modal::{CursorHandle, DialogHandle, InputCommand, InputQueue, ModalChange, ModalLayer};
use crate::state::{ActorId, Position};
use crate::turn::{TurnEvent, TurnResult};

/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Stopped,
    Running,
    Ended,
}

/// Whether the scheduling loop keeps going or returns to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Yield,
}

pub struct Game<M: MapArea> {
    config: GameConfig,
    status: GameStatus,
    area: M,
    player: ActorId,
    queue: VecDeque<BoxedAction<M>>,
    modals: ModalLayer,
    input: InputQueue,
    messages: MessageLog,
    turn: TurnResult,
    player_dead: bool,
}

impl<M: MapArea> Game<M> {
    pub fn new(config: GameConfig, area: M, player: ActorId) -> Result<Self, EngineError> {
        if area.actor(player).is_none() {
            return Err(EngineError::PlayerNotFound(player));
        }

        Ok(Self {
            messages: MessageLog::with_capacity(config.message_capacity),
            config,
            status: GameStatus::Stopped,
            area,
            player,
            queue: VecDeque::new(),
            modals: ModalLayer::new(),
            input: InputQueue::new(),
            turn: TurnResult::default(),
            player_dead: false,
        })
    }

    /// Starts the session. Calling it again while running is a no-op.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        match self.status {
            GameStatus::Ended => Err(EngineError::SessionEnded),
            GameStatus::Running => Ok(()),
            GameStatus::Stopped => {
                self.status = GameStatus::Running;
                info!(player = %self.player, "game started");
                Ok(())
            }
        }
    }

    pub fn stop_game(&mut self) {
        if self.status != GameStatus::Ended {
            info!(from = %self.status, "game stopped");
        }
        self.status = GameStatus::Ended;
    }

    /// Raises the player-death signal so the host tears the session down.
    pub fn reset(&mut self) {
        self.player_dead = true;
    }

    /// Returns the player-death signal and clears it.
    pub fn is_player_dead(&mut self) -> bool {
        std::mem::take(&mut self.player_dead)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Advances the game by one host tick.
    ///
    /// A waiting dialog or cursor gets one input step and, if it is still
    /// waiting, the tick ends there. Otherwise actions are drained and
    /// refilled until the player has acted, an actor has no action ready,
    /// or the player died.
    pub fn process_turn(&mut self) -> TurnResult {
        let running = self.is_running();
        self.turn = TurnResult::reset(&self.turn, running);
        if !running {
            return self.turn.clone();
        }

        if self.modals.process(&mut self.input) {
            return self.turn.clone();
        }

        self.schedule();
        self.turn.clone()
    }

    /// Appends an action to the back of the queue.
    pub fn enqueue(&mut self, action: BoxedAction<M>) {
        self.queue.push_back(action);
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn push_input(&mut self, command: InputCommand) {
        self.input.push(command);
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    pub fn set_active_dialog(&mut self, dialog: Option<DialogHandle>) -> ModalChange {
        self.modals.set_active_dialog(dialog)
    }

    pub fn set_active_cursor(&mut self, cursor: Option<CursorHandle>) -> ModalChange {
        self.modals.set_active_cursor(cursor)
    }

    pub fn modals(&self) -> &ModalLayer {
        &self.modals
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn display_message(&mut self, message: impl Into<String>) {
        self.messages.add(message);
    }

    pub fn area(&self) -> &M {
        &self.area
    }

    pub fn area_mut(&mut self) -> &mut M {
        &mut self.area
    }

    /// Swaps in a new map area and returns the previous one.
    ///
    /// Queued actions belong to the old area and are discarded.
    pub fn set_current_map_area(&mut self, area: M) -> Result<M, EngineError> {
        if area.actor(self.player).is_none() {
            return Err(EngineError::PlayerNotFound(self.player));
        }

        let dropped = self.queue.len();
        self.queue.clear();
        info!(dropped, "map area changed");
        Ok(std::mem::replace(&mut self.area, area))
    }

    pub fn player(&self) -> ActorId {
        self.player
    }

    pub fn player_actor(&self) -> Option<&M::Actor> {
        self.area.actor(self.player)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_turn(&self) -> &TurnResult {
        &self.turn
    }

    pub fn add_event(&mut self, event: TurnEvent) {
        self.turn.add_event(event);
    }

    pub fn set_currently_looking_at(&mut self, position: Position, draw_actor: bool) {
        self.turn.set_current_look(position, draw_actor);
    }
}

impl<M: MapArea> std::fmt::Debug for Game<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("status", &self.status)
            .field("player", &self.player)
            .field("queued", &self.queue.len())
            .field("modals", &self.modals)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}
