use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{Action, ActionContext, ActionResult};
use crate::modal::{Dialog, DialogResult};
use crate::state::ActorId;

type OpenDialog<M, D> =
    Box<dyn FnOnce(&mut ActionContext<'_, M>) -> Result<Rc<RefCell<D>>, ActionResult<M>>>;
type ResolveDialog<M, T> =
    Box<dyn FnOnce(DialogResult<T>, &mut ActionContext<'_, M>) -> ActionResult<M>>;

/// An action that needs an answer from the player before it can resolve.
///
/// The first perform opens the dialog and reports incomplete, so the action
/// is re-queued while the dialog holds the input. Once the dialog has an
/// answer the next perform hands it to the resolver, whose result (possibly
/// carrying an alternate action) becomes this action's result.
pub struct DialogAction<M, D: Dialog> {
    actor: ActorId,
    label: &'static str,
    open: Option<OpenDialog<M, D>>,
    dialog: Option<Rc<RefCell<D>>>,
    resolve: Option<ResolveDialog<M, D::Output>>,
}

impl<M: 'static, D: Dialog + 'static> DialogAction<M, D> {
    /// `open` builds the dialog from the world at perform time; returning
    /// `Err(result)` skips the dialog and finishes with that result.
    pub fn new<O, R>(actor: ActorId, label: &'static str, open: O, resolve: R) -> Self
    where
        O: FnOnce(&mut ActionContext<'_, M>) -> Result<Rc<RefCell<D>>, ActionResult<M>>
            + 'static,
        R: FnOnce(DialogResult<D::Output>, &mut ActionContext<'_, M>) -> ActionResult<M>
            + 'static,
    {
        Self {
            actor,
            label,
            open: Some(Box::new(open)),
            dialog: None,
            resolve: Some(Box::new(resolve)),
        }
    }

    pub fn with_dialog<R>(actor: ActorId, label: &'static str, dialog: D, resolve: R) -> Self
    where
        R: FnOnce(DialogResult<D::Output>, &mut ActionContext<'_, M>) -> ActionResult<M>
            + 'static,
    {
        let dialog = Rc::new(RefCell::new(dialog));
        Self::new(actor, label, move |_| Ok(dialog), resolve)
    }
}

impl<M, D: Dialog + 'static> Action<M> for DialogAction<M, D> {
    fn actor(&self) -> Option<ActorId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, M>) -> ActionResult<M> {
        if let Some(open) = self.open.take() {
            let dialog = match open(ctx) {
                Ok(dialog) => dialog,
                Err(result) => return result,
            };
            D::activate(Rc::clone(&dialog), ctx.modals);
            self.dialog = Some(dialog);
            return ActionResult::incomplete();
        }

        let answer = self
            .dialog
            .as_ref()
            .and_then(|dialog| dialog.borrow_mut().take_result());

        match (answer, self.resolve.take()) {
            (Some(answer), Some(resolve)) => resolve(answer, ctx),
            (None, resolve) => {
                self.resolve = resolve;
                ActionResult::incomplete()
            }
            (Some(_), None) => ActionResult::failure(),
        }
    }
}

impl<M, D: Dialog> fmt::Debug for DialogAction<M, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("actor", &self.actor)
            .field("label", &self.label)
            .field("opened", &self.dialog.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageLog;
    use crate::modal::{InputCommand, InputQueue, Menu, MenuDialog, ModalLayer};
    use crate::turn::TurnResult;

    struct Fixture {
        messages: MessageLog,
        modals: ModalLayer,
        turn: TurnResult,
        dead: bool,
        area: (),
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                messages: MessageLog::new(),
                modals: ModalLayer::new(),
                turn: TurnResult::default(),
                dead: false,
                area: (),
            }
        }

        fn perform(&mut self, action: &mut dyn Action<()>) -> ActionResult<()> {
            let mut ctx = ActionContext::new(
                &mut self.area,
                &mut self.messages,
                &mut self.modals,
                &mut self.turn,
                ActorId(0),
                &mut self.dead,
            );
            action.perform(&mut ctx)
        }
    }

    fn pick_action() -> DialogAction<(), MenuDialog<&'static str>> {
        DialogAction::<(), _>::with_dialog(
            ActorId(0),
            "pick",
            MenuDialog::new("Pick", Menu::new(vec!["apple", "pear"])),
            |answer, ctx| match answer.into_item() {
                Some(item) => {
                    ctx.display_message(format!("You take the {item}."));
                    ActionResult::success()
                }
                None => ActionResult::failure(),
            },
        )
    }

    #[test]
    fn stays_incomplete_until_the_dialog_answers() {
        let mut fixture = Fixture::new();
        let mut action = pick_action();

        assert!(!fixture.perform(&mut action).is_completed());
        assert!(fixture.modals.is_waiting());
        assert!(!fixture.perform(&mut action).is_completed());

        let mut input = InputQueue::new();
        input.extend([InputCommand::Down, InputCommand::Confirm]);
        assert!(fixture.modals.process(&mut input));
        assert!(!fixture.modals.process(&mut input));
        assert!(fixture.modals.active_dialog().is_none());

        let result = fixture.perform(&mut action);
        assert!(result.is_completed());
        assert!(result.is_success());
        assert_eq!(fixture.messages.latest(), Some("You take the pear."));
    }

    #[test]
    fn open_failure_finishes_without_a_dialog() {
        let mut fixture = Fixture::new();
        let mut action: DialogAction<(), MenuDialog<u8>> = DialogAction::new(
            ActorId(0),
            "empty",
            |_| Err(ActionResult::failure().with_message("Nothing here.")),
            |_, _| ActionResult::success(),
        );

        let result = fixture.perform(&mut action);
        assert!(result.is_completed());
        assert!(!result.is_success());
        assert_eq!(result.message(), "Nothing here.");
        assert!(fixture.modals.active_dialog().is_none());
    }
}
