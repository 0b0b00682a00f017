//! Modal interrupts that suspend scheduling while they consume player input.
//!
//! Dialogs (menu-style prompts) and cursors (tile targeting) are tracked as two
//! independent slots, each with its own stack so nested prompts unwind in
//! order. While either slot is waiting, [`crate::Game::process_turn`] feeds it
//! one input step per call instead of advancing the simulation.

mod cursor;
mod dialog;
mod input;
mod menu;
mod stack;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use cursor::Cursor;
pub use dialog::{Dialog, DialogResult};
pub use input::{InputCommand, InputQueue};
pub use menu::{Menu, MenuDialog, MenuError};
pub use stack::{ModalChange, ModalStack};

/// A UI element that can claim exclusive control of input.
pub trait Modal {
    /// Whether the modal still needs input before it can resolve.
    fn waiting_for_result(&self) -> bool;

    /// Consumes one unit of input (if any) and reports whether it is still waiting.
    fn process(&mut self, input: Option<InputCommand>) -> bool;
}

pub type DialogHandle = Rc<RefCell<dyn Modal>>;
pub type CursorHandle = Rc<RefCell<Cursor>>;

/// The dialog and cursor slots owned by the orchestrator.
#[derive(Default)]
pub struct ModalLayer {
    dialogs: ModalStack<dyn Modal>,
    cursors: ModalStack<Cursor>,
}

impl ModalLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_dialog(&mut self, dialog: Option<DialogHandle>) -> ModalChange {
        let change = self.dialogs.set_active(dialog);
        tracing::debug!(%change, depth = self.dialogs.depth(), "dialog slot changed");
        change
    }

    pub fn set_active_cursor(&mut self, cursor: Option<CursorHandle>) -> ModalChange {
        let change = self.cursors.set_active(cursor);
        tracing::debug!(%change, depth = self.cursors.depth(), "cursor slot changed");
        change
    }

    pub fn active_dialog(&self) -> Option<&DialogHandle> {
        self.dialogs.active()
    }

    pub fn active_cursor(&self) -> Option<&CursorHandle> {
        self.cursors.active()
    }

    /// Whether either slot is still waiting for input.
    pub fn is_waiting(&self) -> bool {
        self.dialogs.is_waiting() || self.cursors.is_waiting()
    }

    /// Feeds one input step to the dialog slot, then to the cursor slot.
    ///
    /// Returns `true` as soon as a slot is still waiting afterwards.
    pub(crate) fn process(&mut self, input: &mut InputQueue) -> bool {
        self.dialogs.process(input) || self.cursors.process(input)
    }
}

impl fmt::Debug for ModalLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalLayer")
            .field("dialogs", &self.dialogs.depth())
            .field("cursors", &self.cursors.depth())
            .finish()
    }
}
