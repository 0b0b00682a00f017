use std::collections::VecDeque;

/// One unit of player input, already decoded from the host's key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InputCommand {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Char(char),
}

impl InputCommand {
    /// Maps a letter to its zero-based row in a menu page (`a`/`A` is 0).
    pub fn letter_index(self) -> Option<usize> {
        match self {
            InputCommand::Char(c @ 'a'..='z') => Some(c as usize - 'a' as usize),
            InputCommand::Char(c @ 'A'..='Z') => Some(c as usize - 'A' as usize),
            _ => None,
        }
    }
}

/// Pending input waiting to be consumed by a modal or by the player actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<InputCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: InputCommand) {
        self.pending.push_back(command);
    }

    pub fn pop(&mut self) -> Option<InputCommand> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<InputCommand> {
        self.pending.front().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Extend<InputCommand> for InputQueue {
    fn extend<I: IntoIterator<Item = InputCommand>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_rows_case_insensitively() {
        assert_eq!(InputCommand::Char('a').letter_index(), Some(0));
        assert_eq!(InputCommand::Char('C').letter_index(), Some(2));
        assert_eq!(InputCommand::Char('z').letter_index(), Some(25));
        assert_eq!(InputCommand::Char('7').letter_index(), None);
        assert_eq!(InputCommand::Confirm.letter_index(), None);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = InputQueue::new();
        queue.extend([InputCommand::Up, InputCommand::Confirm]);
        assert_eq!(queue.peek(), Some(InputCommand::Up));
        assert_eq!(queue.pop(), Some(InputCommand::Up));
        assert_eq!(queue.pop(), Some(InputCommand::Confirm));
        assert_eq!(queue.pop(), None);
    }
}
