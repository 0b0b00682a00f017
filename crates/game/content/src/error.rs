use game_core::{ActorId, Position};

/// Errors raised while laying out an arena.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("arena must be at least 1x1, got {width}x{height}")]
    EmptyArena { width: u32, height: u32 },

    #[error("position {0} lies outside the arena")]
    OutOfBounds(Position),

    #[error("position {0} is blocked by a wall")]
    Blocked(Position),

    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: ActorId,
    },

    #[error("{name} has speed {speed}; uncontrolled creatures must stay below {threshold}")]
    TooFast {
        name: String,
        speed: u32,
        threshold: u32,
    },
}
