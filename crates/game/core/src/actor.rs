use crate::action::BoxedAction;
use crate::energy::Energy;
use crate::modal::InputQueue;
use crate::state::{ActorId, Position};

/// A creature that occupies a slot in a map area's rotation.
///
/// Actors are owned by their map area. The engine reaches them by id and
/// never deletes them: dead actors are skipped.
pub trait Actor<M> {
    fn id(&self) -> ActorId;

    fn name(&self) -> &str;

    fn is_alive(&self) -> bool;

    fn position(&self) -> Position;

    fn energy(&self) -> &Energy;

    fn energy_mut(&mut self) -> &mut Energy;

    /// Energy gained per rotation pass, which may depend on terrain or status.
    fn effective_speed(&self, area: &M) -> u32;

    /// Decides the next action, or `None` when the actor is not ready yet
    /// (for example the player has not pressed a key).
    fn next_action(&mut self, input: &mut InputQueue) -> Option<BoxedAction<M>>;

    /// Called once a successful action ends this actor's turn.
    fn finish_turn(&mut self);

    fn on_attacked(&mut self, _attacker: ActorId) {}
}
