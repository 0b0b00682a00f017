use std::fmt;

use super::BoxedAction;

/// Outcome of performing one action.
///
/// `completed` says whether the action fully resolved during this call; an
/// incomplete action goes back on the queue unchanged. `alternate` names a
/// follow-up action that runs immediately in its place.
pub struct ActionResult<M> {
    completed: bool,
    success: bool,
    message: String,
    alternate: Option<BoxedAction<M>>,
}

impl<M> ActionResult<M> {
    pub fn success() -> Self {
        Self::new(true, true)
    }

    /// Completed, but without the intended effect (for example a blocked step).
    pub fn failure() -> Self {
        Self::new(true, false)
    }

    pub fn incomplete() -> Self {
        Self::new(false, false)
    }

    /// Completed, with `action` to be performed in its place.
    pub fn alternate(action: BoxedAction<M>) -> Self {
        Self {
            alternate: Some(action),
            ..Self::new(true, true)
        }
    }

    fn new(completed: bool, success: bool) -> Self {
        Self {
            completed,
            success,
            message: String::new(),
            alternate: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn take_alternate(&mut self) -> Option<BoxedAction<M>> {
        self.alternate.take()
    }
}

impl<M> fmt::Debug for ActionResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionResult")
            .field("completed", &self.completed)
            .field("success", &self.success)
            .field("message", &self.message)
            .field("alternate", &self.alternate)
            .finish()
    }
}
