use crate::state::{ActorId, Position};

/// Observable occurrence recorded by an action during one `process_turn()` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Moved {
        actor: ActorId,
        from: Position,
        to: Position,
    },
    Attacked {
        attacker: ActorId,
        target: ActorId,
        damage: u32,
    },
    Died {
        actor: ActorId,
    },
    PickedUp {
        actor: ActorId,
        item: String,
    },
}

impl TurnEvent {
    /// The actor that caused the event.
    pub fn actor(&self) -> ActorId {
        match self {
            TurnEvent::Moved { actor, .. }
            | TurnEvent::Died { actor }
            | TurnEvent::PickedUp { actor, .. } => *actor,
            TurnEvent::Attacked { attacker, .. } => *attacker,
        }
    }
}
