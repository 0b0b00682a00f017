//! Append-only message log shown in the bottom pane of the UI.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Bounded log of display messages.
///
/// Empty messages are ignored so actions may return a blank message without
/// cluttering the log. Once `capacity` is reached the oldest entry is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::with_capacity(GameConfig::DEFAULT_MESSAGE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
