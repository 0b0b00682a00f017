//! Performing a single queued action, including its alternate chain.

use tracing::{error, warn};

use super::{Flow, Game};
use crate::action::{Action, ActionContext, ActionResult, BoxedAction};
use crate::actor::Actor;
use crate::map::MapArea;

impl<M: MapArea> Game<M> {
    /// Performs the action at the head of the queue.
    ///
    /// Returns [`Flow::Yield`] when the current call to `process_turn` should
    /// hand control back to the host.
    pub(super) fn execute(&mut self, mut action: BoxedAction<M>) -> Flow {
        let Some(actor_id) = action.actor() else {
            error!(?action, "dropping action without an actor");
            return Flow::Continue;
        };

        if !self.area.actor(actor_id).is_some_and(|actor| actor.is_alive()) {
            self.area.next_actor("queued action belongs to a dead actor");
            return Flow::Yield;
        }

        let result = self.perform(action.as_mut());
        if !result.is_completed() {
            self.queue.push_back(action);
        } else {
            let (result, performed) = self.resolve_alternates(result);
            let ready = self
                .area
                .actor(actor_id)
                .map(|actor| actor.energy().can_act());

            match ready {
                Some(true) => {
                    if let Some(actor) = self.area.actor(actor_id) {
                        warn!(
                            actor = actor.name(),
                            alive = actor.is_alive(),
                            energy = actor.energy().current(),
                            completed = result.is_completed(),
                            success = result.is_success(),
                            message = result.message(),
                            performed,
                            "actor can still act after its action resolved"
                        );
                    }
                    self.area.next_actor("actor can still act after its action");
                    return Flow::Yield;
                }
                _ if result.is_success() => {
                    if let Some(actor) = self.area.actor_mut(actor_id) {
                        actor.finish_turn();
                    }
                    self.turn.mark_dirty();
                }
                _ => {
                    self.area.next_actor("action did not succeed");
                    return Flow::Yield;
                }
            }
        }

        if actor_id == self.player {
            self.turn.player_acted();
            return Flow::Yield;
        }
        Flow::Continue
    }

    /// Follows `result`'s alternate actions until one resolves without
    /// naming another. Incomplete alternates are re-queued.
    ///
    /// Returns the last result and the number of alternates performed.
    pub(super) fn resolve_alternates(
        &mut self,
        mut result: ActionResult<M>,
    ) -> (ActionResult<M>, usize) {
        let mut performed = 0;
        while let Some(mut alternate) = result.take_alternate() {
            result = self.perform(alternate.as_mut());
            performed += 1;
            if !result.is_completed() {
                self.queue.push_back(alternate);
            }
        }
        (result, performed)
    }

    pub(super) fn perform(&mut self, action: &mut dyn Action<M>) -> ActionResult<M> {
        let mut ctx = ActionContext::new(
            &mut self.area,
            &mut self.messages,
            &mut self.modals,
            &mut self.turn,
            self.player,
            &mut self.player_dead,
        );
        let result = action.perform(&mut ctx);
        self.messages.add(result.message());
        result
    }
}
