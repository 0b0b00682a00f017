mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Dummy, PLAYER, Rest, running_game, spend};
use game_core::{
    ActionResult, BoxedAction, Cursor, CursorHandle, Dialog, DialogAction, DialogHandle,
    InputCommand, Menu, MenuDialog, ModalChange, Position,
};

fn menu(items: &[&'static str]) -> Rc<RefCell<MenuDialog<&'static str>>> {
    Rc::new(RefCell::new(MenuDialog::new("Choose", Menu::new(items.to_vec()))))
}

fn is_active(active: Option<&DialogHandle>, expected: &DialogHandle) -> bool {
    active.is_some_and(|handle| std::ptr::addr_eq(Rc::as_ptr(handle), Rc::as_ptr(expected)))
}

#[test]
fn dialogs_unwind_in_stack_order() {
    let mut game = running_game(vec![Dummy::player(50)]);
    let first: DialogHandle = menu(&["a"]);
    let second: DialogHandle = menu(&["b"]);

    assert_eq!(game.set_active_dialog(Some(first.clone())), ModalChange::Activated);
    assert_eq!(game.set_active_dialog(Some(first.clone())), ModalChange::AlreadyActive);
    assert_eq!(game.set_active_dialog(Some(second.clone())), ModalChange::Pushed);
    assert!(is_active(game.modals().active_dialog(), &second));

    assert_eq!(game.set_active_dialog(None), ModalChange::Restored);
    assert!(is_active(game.modals().active_dialog(), &first));

    assert_eq!(game.set_active_dialog(None), ModalChange::Cleared);
    assert!(game.modals().active_dialog().is_none());
    assert_eq!(game.set_active_dialog(None), ModalChange::Cleared);
    assert!(game.modals().active_dialog().is_none());
}

#[test]
fn waiting_dialog_suspends_scheduling() {
    let mut game = running_game(vec![Dummy::player(50)]);
    let dialog = menu(&["apple", "pear"]);
    game.set_active_dialog(Some(dialog.clone()));
    game.enqueue(Box::new(Rest(PLAYER)));

    game.push_input(InputCommand::Down);
    let result = game.process_turn();
    assert!(result.is_running());
    assert!(!result.did_player_act());
    assert_eq!(game.queued_len(), 1);
    assert!(game.area().trace.is_empty());

    // no input is still one step for the dialog
    game.process_turn();
    assert_eq!(game.queued_len(), 1);

    game.push_input(InputCommand::Confirm);
    assert!(game.process_turn().did_player_act());
    assert!(game.modals().active_dialog().is_none());
    assert_eq!(game.area().trace, ["rest #0"]);

    let answer = dialog.borrow_mut().take_result().unwrap();
    assert_eq!(answer.into_item(), Some("pear"));
}

#[test]
fn restored_dialog_keeps_claiming_input() {
    let mut game = running_game(vec![Dummy::player(50)]);
    let outer = menu(&["outer"]);
    let inner = menu(&["inner"]);
    game.set_active_dialog(Some(outer.clone()));
    game.set_active_dialog(Some(inner));
    game.enqueue(Box::new(Rest(PLAYER)));

    game.push_input(InputCommand::Cancel);
    game.process_turn();
    assert!(game.modals().is_waiting());
    assert!(game.area().trace.is_empty());

    game.push_input(InputCommand::Confirm);
    assert!(game.process_turn().did_player_act());
    assert_eq!(outer.borrow_mut().take_result().unwrap().into_item(), Some("outer"));
}

#[test]
fn cursor_slot_is_independent_of_dialogs() {
    let mut game = running_game(vec![Dummy::player(50)]);
    let dialog: DialogHandle = menu(&["a"]);
    let cursor: CursorHandle = Rc::new(RefCell::new(Cursor::new(Position::new(2, 2), 5, 5)));

    game.set_active_dialog(Some(dialog));
    assert_eq!(game.set_active_cursor(Some(cursor.clone())), ModalChange::Activated);
    assert!(game.modals().active_dialog().is_some());

    // the dialog answers first, the cursor then holds the input
    game.push_input(InputCommand::Confirm);
    game.process_turn();
    assert!(game.modals().active_dialog().is_none());
    assert!(game.modals().active_cursor().is_some());

    game.push_input(InputCommand::Up);
    game.process_turn();
    assert_eq!(cursor.borrow().position(), Position::new(2, 3));

    game.push_input(InputCommand::Cancel);
    game.process_turn();
    assert!(game.modals().active_cursor().is_none());
}

#[test]
fn dialog_action_waits_for_the_player() {
    let pick: BoxedAction<common::Board> = Box::new(DialogAction::<common::Board, _>::with_dialog(
        PLAYER,
        "pick up",
        MenuDialog::new("Pick up", Menu::new(vec!["apple", "pear"])),
        |answer, ctx| {
            let Some(item) = answer.into_item() else {
                return ActionResult::failure().with_message("Never mind.");
            };
            ctx.area.trace.push(format!("picked {item}"));
            spend(ctx, PLAYER);
            ActionResult::success().with_message(format!("You pick up the {item}."))
        },
    ));
    let mut game = running_game(vec![Dummy::scripted(0, 50, vec![pick])]);

    assert!(game.process_turn().did_player_act());
    assert!(game.modals().is_waiting());
    assert_eq!(game.queued_len(), 1);

    game.push_input(InputCommand::Down);
    assert!(!game.process_turn().did_player_act());
    assert_eq!(game.queued_len(), 1);

    game.push_input(InputCommand::Confirm);
    let result = game.process_turn();
    assert!(result.did_player_act());
    assert!(result.needs_redraw());
    assert_eq!(game.area().trace, ["picked pear"]);
    assert_eq!(game.messages().latest(), Some("You pick up the pear."));
    assert_eq!(game.queued_len(), 0);
}
