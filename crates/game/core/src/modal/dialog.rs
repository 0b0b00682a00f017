use std::cell::RefCell;
use std::rc::Rc;

use super::{DialogHandle, Modal, ModalChange, ModalLayer};

/// Answer produced by a dialog once the player confirms or backs out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogResult<T> {
    item: Option<T>,
    canceled: bool,
}

impl<T> DialogResult<T> {
    pub fn ok(item: T) -> Self {
        Self {
            item: Some(item),
            canceled: false,
        }
    }

    pub fn cancel() -> Self {
        Self {
            item: None,
            canceled: true,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn into_item(self) -> Option<T> {
        self.item
    }
}

/// A modal that resolves to a typed [`DialogResult`].
pub trait Dialog: Modal {
    type Output;

    /// Hands out the answer once; `None` while still waiting or once taken.
    fn take_result(&mut self) -> Option<DialogResult<Self::Output>>;

    /// Places the dialog in the modal slot it belongs to.
    fn activate(dialog: Rc<RefCell<Self>>, modals: &mut ModalLayer) -> ModalChange
    where
        Self: Sized + 'static,
    {
        let handle: DialogHandle = dialog;
        modals.set_active_dialog(Some(handle))
    }
}
