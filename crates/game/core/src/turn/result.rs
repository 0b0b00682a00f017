use bitflags::bitflags;

use super::TurnEvent;
use crate::state::Position;

bitflags! {
    /// Per-tick status bits carried by a [`TurnResult`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TurnFlags: u8 {
        /// The engine was running when the result was produced.
        const RUNNING      = 1 << 0;
        /// A player-owned action completed during this call.
        const PLAYER_ACTED = 1 << 1;
        /// An actor finished its turn and the map must be repainted.
        const DIRTY        = 1 << 2;
    }
}

/// Tile the presentation layer is currently describing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Look {
    pub position: Position,
    /// Whether the actor standing on the tile should be described too.
    pub draw_actor: bool,
}

/// Everything that became observable during one `process_turn()` call.
///
/// A new result is derived from the previous one every call: the look target
/// carries over, while events and flags start fresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    events: Vec<TurnEvent>,
    current_look: Option<Look>,
    flags: TurnFlags,
}

impl TurnResult {
    pub fn reset(previous: &TurnResult, running: bool) -> Self {
        let mut flags = TurnFlags::empty();
        flags.set(TurnFlags::RUNNING, running);

        Self {
            events: Vec::new(),
            current_look: previous.current_look,
            flags,
        }
    }

    pub fn add_event(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    pub fn set_current_look(&mut self, position: Position, draw_actor: bool) {
        self.current_look = Some(Look {
            position,
            draw_actor,
        });
    }

    pub fn clear_look(&mut self) {
        self.current_look = None;
    }

    pub fn current_look(&self) -> Option<Look> {
        self.current_look
    }

    /// Marks that a player-owned action was observed during this call.
    pub fn player_acted(&mut self) {
        self.flags.insert(TurnFlags::PLAYER_ACTED);
    }

    pub fn did_player_act(&self) -> bool {
        self.flags.contains(TurnFlags::PLAYER_ACTED)
    }

    pub fn mark_dirty(&mut self) {
        self.flags.insert(TurnFlags::DIRTY);
    }

    pub fn needs_redraw(&self) -> bool {
        self.flags.intersects(TurnFlags::DIRTY | TurnFlags::PLAYER_ACTED)
    }

    pub fn is_running(&self) -> bool {
        self.flags.contains(TurnFlags::RUNNING)
    }

    pub fn flags(&self) -> TurnFlags {
        self.flags
    }
}
