//! Tile-targeting cursor.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Dialog, DialogResult, InputCommand, Modal, ModalChange, ModalLayer};
use crate::state::{CardinalDirection, Position};

/// Modal cursor that moves over a bounded grid until a tile is chosen.
///
/// Lives in its own modal slot so a targeting prompt can run on top of an
/// open menu without displacing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    width: u32,
    height: u32,
    outcome: Option<DialogResult<Position>>,
    resolved: bool,
}

impl Cursor {
    /// Creates a cursor at `position`, clamped to a `width` x `height` grid.
    pub fn new(position: Position, width: u32, height: u32) -> Self {
        let mut cursor = Self {
            position: Position::ORIGIN,
            width: width.max(1),
            height: height.max(1),
            outcome: None,
            resolved: false,
        };
        cursor.position = cursor.clamp(position);
        cursor
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn move_toward(&mut self, direction: CardinalDirection) {
        self.position = self.clamp(self.position.step(direction));
    }

    fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, last_index(self.width)),
            position.y.clamp(0, last_index(self.height)),
        )
    }

    fn resolve(&mut self, outcome: DialogResult<Position>) {
        self.outcome = Some(outcome);
        self.resolved = true;
    }
}

impl Modal for Cursor {
    fn waiting_for_result(&self) -> bool {
        !self.resolved
    }

    fn process(&mut self, input: Option<InputCommand>) -> bool {
        match input {
            Some(InputCommand::Up) => self.move_toward(CardinalDirection::North),
            Some(InputCommand::Down) => self.move_toward(CardinalDirection::South),
            Some(InputCommand::Left) => self.move_toward(CardinalDirection::West),
            Some(InputCommand::Right) => self.move_toward(CardinalDirection::East),
            Some(InputCommand::Confirm) => self.resolve(DialogResult::ok(self.position)),
            Some(InputCommand::Cancel) => self.resolve(DialogResult::cancel()),
            Some(InputCommand::Char(_)) | None => {}
        }
        self.waiting_for_result()
    }
}

impl Dialog for Cursor {
    type Output = Position;

    fn take_result(&mut self) -> Option<DialogResult<Position>> {
        self.outcome.take()
    }

    fn activate(dialog: Rc<RefCell<Self>>, modals: &mut ModalLayer) -> ModalChange {
        modals.set_active_cursor(Some(dialog))
    }
}

/// Largest coordinate on an axis of `extent` tiles; `extent` is at least 1.
fn last_index(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_clamps_to_bounds() {
        let mut cursor = Cursor::new(Position::new(-4, 30), 10, 10);
        assert_eq!(cursor.position(), Position::new(0, 9));

        cursor.process(Some(InputCommand::Up));
        cursor.process(Some(InputCommand::Left));
        assert_eq!(cursor.position(), Position::new(0, 9));

        cursor.process(Some(InputCommand::Right));
        cursor.process(Some(InputCommand::Down));
        assert_eq!(cursor.position(), Position::new(1, 8));
    }

    #[test]
    fn confirm_yields_the_targeted_tile() {
        let mut cursor = Cursor::new(Position::new(2, 2), 5, 5);
        cursor.process(Some(InputCommand::Right));
        assert!(!cursor.process(Some(InputCommand::Confirm)));
        assert_eq!(
            cursor.take_result().and_then(DialogResult::into_item),
            Some(Position::new(3, 2))
        );
    }

    #[test]
    fn oversized_grids_do_not_overflow() {
        let mut cursor = Cursor::new(Position::new(5, 5), u32::MAX, u32::MAX);
        assert_eq!(cursor.position(), Position::new(5, 5));

        cursor.process(Some(InputCommand::Right));
        assert_eq!(cursor.position(), Position::new(6, 5));
    }
}
