//! Map-area contract consumed by the scheduler, plus a reusable rotation.

use crate::actor::Actor;
use crate::state::{ActorId, Position};

/// The region of the world currently in play.
///
/// The map area owns its actors and the order in which they take turns. The
/// engine only ever asks for the current actor, advances the rotation, and
/// triggers the once-per-player-turn spawn hook.
pub trait MapArea: Sized {
    type Actor: Actor<Self>;

    /// The actor whose turn slot is active.
    fn current_actor(&self) -> ActorId;

    /// Advances the rotation. `reason` is a diagnostic breadcrumb only.
    fn next_actor(&mut self, reason: &str);

    /// Called once each time the rotation moves past the player.
    fn spawn_monsters(&mut self);

    fn has_items_at(&self, position: Position) -> bool;

    fn actor(&self, id: ActorId) -> Option<&Self::Actor>;

    fn actor_mut(&mut self, id: ActorId) -> Option<&mut Self::Actor>;

    /// Number of actors in the rotation, living or dead.
    fn actor_count(&self) -> usize;
}

/// Round-robin list of actor ids with a cursor on the current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorRotation {
    order: Vec<ActorId>,
    current: usize,
}

impl ActorRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn add(&mut self, id: ActorId) {
        self.order.push(id);
    }

    /// Removes `id`; the cursor stays on a valid slot.
    pub fn remove(&mut self, id: ActorId) -> bool {
        let Some(index) = self.order.iter().position(|&entry| entry == id) else {
            return false;
        };
        self.order.remove(index);

        if self.order.is_empty() {
            self.current = 0;
        } else {
            if index < self.current {
                self.current -= 1;
            }
            self.current %= self.order.len();
        }
        true
    }

    pub fn current(&self) -> Option<ActorId> {
        self.order.get(self.current).copied()
    }

    /// The actor that would be current after [`Self::advance`].
    pub fn peek(&self) -> Option<ActorId> {
        if self.order.is_empty() {
            return None;
        }
        self.order.get((self.current + 1) % self.order.len()).copied()
    }

    pub fn advance(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.order.len();
    }

    pub fn previous(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = (self.current + self.order.len() - 1) % self.order.len();
    }

    pub fn iter(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(ids: &[u32]) -> ActorRotation {
        let mut rotation = ActorRotation::new();
        for &id in ids {
            rotation.add(ActorId(id));
        }
        rotation
    }

    #[test]
    fn empty_rotation_has_no_current() {
        let mut rotation = ActorRotation::new();
        rotation.advance();
        rotation.previous();
        assert_eq!(rotation.current(), None);
        assert_eq!(rotation.peek(), None);
    }

    #[test]
    fn advance_and_previous_wrap_around() {
        let mut rotation = rotation(&[0, 1, 2]);
        assert_eq!(rotation.peek(), Some(ActorId(1)));

        rotation.previous();
        assert_eq!(rotation.current(), Some(ActorId(2)));

        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), Some(ActorId(1)));
    }

    #[test]
    fn removing_keeps_the_cursor_on_the_same_actor() {
        let mut rotation = rotation(&[0, 1, 2]);
        rotation.advance();
        rotation.advance();
        assert!(rotation.remove(ActorId(0)));
        assert_eq!(rotation.current(), Some(ActorId(2)));

        assert!(rotation.remove(ActorId(2)));
        assert_eq!(rotation.current(), Some(ActorId(1)));

        assert!(!rotation.remove(ActorId(9)));
        assert!(rotation.remove(ActorId(1)));
        assert!(rotation.is_empty());
        assert_eq!(rotation.current(), None);
    }
}
