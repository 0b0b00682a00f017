//! Actions are the unit of work the scheduler performs on behalf of actors.
//!
//! An action is performed against an [`ActionContext`] and reports back an
//! [`ActionResult`]. Results may be incomplete (the action is re-queued as-is)
//! or name an alternate action that runs in its place, e.g. a step into an
//! occupied tile becoming an attack.

mod context;
mod dialog;
mod result;

use std::fmt;

pub use context::ActionContext;
pub use dialog::DialogAction;
pub use result::ActionResult;

use crate::state::ActorId;

pub trait Action<M>: fmt::Debug {
    /// The actor performing this action; `None` for world-level actions.
    fn actor(&self) -> Option<ActorId>;

    fn perform(&mut self, ctx: &mut ActionContext<'_, M>) -> ActionResult<M>;
}

pub type BoxedAction<M> = Box<dyn Action<M>>;
