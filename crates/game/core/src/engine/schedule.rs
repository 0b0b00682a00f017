//! The scheduling loop: drain the action queue, then refill it from the
//! actor whose turn slot is active.

use tracing::{debug, error};

use super::{Flow, Game};
use crate::actor::Actor;
use crate::map::MapArea;
use crate::state::ActorId;

impl<M: MapArea> Game<M> {
    pub(super) fn schedule(&mut self) {
        self.look_at_items_under_player();

        loop {
            if let Flow::Yield = self.drain_queue() {
                return;
            }
            if let Flow::Yield = self.fill_queue() {
                return;
            }
            if self.player_dead {
                return;
            }
        }
    }

    fn look_at_items_under_player(&mut self) {
        if self.turn.current_look().is_some() {
            return;
        }
        let Some(position) = self.area.actor(self.player).map(|player| player.position()) else {
            return;
        };
        if self.area.has_items_at(position) {
            self.turn.set_current_look(position, false);
        }
    }

    fn drain_queue(&mut self) -> Flow {
        while let Some(action) = self.queue.pop_front() {
            if let Flow::Yield = self.execute(action) {
                return Flow::Yield;
            }
            // an action opened a modal for someone other than the player
            if self.modals.is_waiting() {
                return Flow::Yield;
            }
        }
        Flow::Continue
    }

    fn fill_queue(&mut self) -> Flow {
        let mut idle_visits = 0;

        while self.queue.is_empty() {
            let Some(actor_id) = self.next_living_actor() else {
                return Flow::Yield;
            };
            let Some(speed) = self
                .area
                .actor(actor_id)
                .map(|actor| actor.effective_speed(&self.area))
            else {
                return Flow::Yield;
            };
            let Some(actor) = self.area.actor_mut(actor_id) else {
                return Flow::Yield;
            };

            if actor.energy().can_act() || actor.energy_mut().increase(speed) {
                match actor.next_action(&mut self.input) {
                    Some(action) => self.queue.push_back(action),
                    None => return Flow::Yield,
                }
                continue;
            }

            idle_visits = if speed == 0 { idle_visits + 1 } else { 0 };
            if idle_visits > self.area.actor_count() {
                error!("no actor in the rotation gains energy");
                return Flow::Yield;
            }

            self.area.next_actor("not enough energy to act");
            if actor_id == self.player {
                self.area.spawn_monsters();
                debug!(queued = self.queue.len(), "player turn passed");
            }
        }
        Flow::Continue
    }

    /// Rotates past dead actors. Gives up after one full lap.
    fn next_living_actor(&mut self) -> Option<ActorId> {
        for _ in 0..=self.area.actor_count() {
            let id = self.area.current_actor();
            if self.area.actor(id).is_some_and(|actor| actor.is_alive()) {
                return Some(id);
            }
            self.area.next_actor("skipping dead actor");
        }

        error!("no living actor in the rotation");
        None
    }
}
