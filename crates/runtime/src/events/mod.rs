//! Runtime events broadcast to every subscriber.

mod bus;

pub use bus::EventBus;

use game_core::TurnResult;

/// Observable outcome of a runtime step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A tick in which the player acted or world events were recorded.
    Turn(TurnResult),
    /// The engine raised the player-death signal; the runtime stops next.
    PlayerDied,
    /// The run loop exited.
    Stopped,
}
