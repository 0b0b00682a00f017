//! Paginated selection lists and the dialog built on top of them.

use super::{Dialog, DialogResult, InputCommand, Modal};
use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("menu page size must be at least one row")]
    ZeroPageSize,
}

/// Paginated list with a single highlighted row.
///
/// Pages are numbered from 1. Letters select a row on the current page
/// (`a` is the first row), arrows move the highlight or flip pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu<T> {
    items: Vec<T>,
    page_size: usize,
    page_count: usize,
    current_page: usize,
    page_index: usize,
    active_index: usize,
}

impl<T> Menu<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::build(items, GameConfig::DEFAULT_MENU_PAGE_SIZE)
    }

    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Result<Self, MenuError> {
        if page_size == 0 {
            return Err(MenuError::ZeroPageSize);
        }
        Ok(Self::build(items, page_size))
    }

    fn build(items: Vec<T>, page_size: usize) -> Self {
        let page_count = items.len().div_ceil(page_size);
        Self {
            items,
            page_size,
            page_count,
            current_page: 1,
            page_index: 0,
            active_index: 0,
        }
    }

    pub fn process_key(&mut self, command: InputCommand) {
        if self.items.is_empty() {
            return;
        }

        match command {
            InputCommand::Up => self.page_index = self.page_index.saturating_sub(1),
            InputCommand::Down => self.page_index += 1,
            InputCommand::Left => self.current_page = self.current_page.saturating_sub(1).max(1),
            InputCommand::Right => self.current_page = (self.current_page + 1).min(self.page_count),
            other => self.page_index = other.letter_index().unwrap_or(0),
        }

        // the last page may hold fewer rows than the one we came from
        self.page_index = self.page_index.min(self.rows_on_page() - 1);
        self.active_index = self.page_offset(self.page_index);
    }

    pub fn active_item(&self) -> Option<&T> {
        self.items.get(self.active_index)
    }

    pub fn item_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn first_item_index(&self) -> usize {
        self.page_offset(0)
    }

    /// Exclusive end of the rows shown on the current page.
    pub fn last_item_index(&self) -> usize {
        self.first_item_index() + self.rows_on_page()
    }

    /// Rows visible on the current page.
    pub fn page_items(&self) -> &[T] {
        &self.items[self.first_item_index()..self.last_item_index()]
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn page_offset(&self, index: usize) -> usize {
        (self.current_page - 1) * self.page_size + index
    }

    fn rows_on_page(&self) -> usize {
        let first = self.first_item_index();
        self.items.len().saturating_sub(first).min(self.page_size)
    }
}

/// Dialog that lets the player pick one entry of a [`Menu`].
///
/// `Confirm` answers with the highlighted item, `Cancel` backs out, any other
/// input moves the highlight.
#[derive(Clone, Debug)]
pub struct MenuDialog<T> {
    title: String,
    menu: Menu<T>,
    outcome: Option<DialogResult<T>>,
    resolved: bool,
}

impl<T: Clone> MenuDialog<T> {
    pub fn new(title: impl Into<String>, menu: Menu<T>) -> Self {
        Self {
            title: title.into(),
            menu,
            outcome: None,
            resolved: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn menu(&self) -> &Menu<T> {
        &self.menu
    }

    fn resolve(&mut self, outcome: DialogResult<T>) {
        self.outcome = Some(outcome);
        self.resolved = true;
    }
}

impl<T: Clone> Modal for MenuDialog<T> {
    fn waiting_for_result(&self) -> bool {
        !self.resolved
    }

    fn process(&mut self, input: Option<InputCommand>) -> bool {
        match input {
            Some(InputCommand::Confirm) => {
                let outcome = match self.menu.active_item() {
                    Some(item) => DialogResult::ok(item.clone()),
                    None => DialogResult::cancel(),
                };
                self.resolve(outcome);
            }
            Some(InputCommand::Cancel) => self.resolve(DialogResult::cancel()),
            Some(command) => self.menu.process_key(command),
            None => {}
        }
        self.waiting_for_result()
    }
}

impl<T: Clone> Dialog for MenuDialog<T> {
    type Output = T;

    fn take_result(&mut self) -> Option<DialogResult<T>> {
        self.outcome.take()
    }
}
