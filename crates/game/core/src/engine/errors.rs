//! Errors surfaced by the orchestrator's construction and lifecycle.

use crate::state::ActorId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("player actor {0} is not part of the map area")]
    PlayerNotFound(ActorId),

    #[error("the game session has ended and cannot be restarted")]
    SessionEnded,
}
