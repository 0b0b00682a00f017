use std::cell::RefCell;
use std::rc::Rc;

use super::{InputQueue, Modal};

/// Outcome of a [`ModalStack::set_active`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModalChange {
    /// Nothing was active; the modal is now active.
    Activated,
    /// The previously active modal was pushed and the new one replaced it.
    Pushed,
    /// The modal was already active; nothing changed.
    AlreadyActive,
    /// The active modal was dropped and its predecessor restored.
    Restored,
    /// The active modal was dropped and nothing is active any more.
    Cleared,
}

/// Single active slot plus the stack of modals it interrupted.
pub struct ModalStack<T: ?Sized> {
    active: Option<Rc<RefCell<T>>>,
    previous: Vec<Rc<RefCell<T>>>,
}

impl<T: ?Sized> ModalStack<T> {
    pub fn new() -> Self {
        Self {
            active: None,
            previous: Vec::new(),
        }
    }

    /// Activates `modal`, or deactivates the current one when `None`.
    pub fn set_active(&mut self, modal: Option<Rc<RefCell<T>>>) -> ModalChange {
        match modal {
            Some(modal) => match self.active.take() {
                Some(current) if same_modal(&current, &modal) => {
                    self.active = Some(current);
                    ModalChange::AlreadyActive
                }
                Some(current) => {
                    self.previous.push(current);
                    self.active = Some(modal);
                    ModalChange::Pushed
                }
                None => {
                    self.active = Some(modal);
                    ModalChange::Activated
                }
            },
            None => {
                self.active = self.previous.pop();
                if self.active.is_some() {
                    ModalChange::Restored
                } else {
                    ModalChange::Cleared
                }
            }
        }
    }

    pub fn active(&self) -> Option<&Rc<RefCell<T>>> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of modals, active one included.
    pub fn depth(&self) -> usize {
        self.previous.len() + usize::from(self.active.is_some())
    }
}

impl<T: ?Sized + Modal> ModalStack<T> {
    pub fn is_waiting(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|modal| modal.borrow().waiting_for_result())
    }

    /// Feeds one input step to the active modal.
    ///
    /// A modal that is no longer waiting is deactivated. Returns whether the
    /// slot still claims input afterwards.
    pub(crate) fn process(&mut self, input: &mut InputQueue) -> bool {
        let Some(active) = self.active.clone() else {
            return false;
        };

        let still_waiting = {
            let mut modal = active.borrow_mut();
            modal.waiting_for_result() && modal.process(input.pop())
        };

        if still_waiting {
            return true;
        }

        self.set_active(None);
        self.is_waiting()
    }
}

impl<T: ?Sized> Default for ModalStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn same_modal<T: ?Sized>(a: &Rc<RefCell<T>>, b: &Rc<RefCell<T>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
