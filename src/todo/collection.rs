//! Ordered, in-memory collection of todo items.

use super::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::item::{TodoField, TodoId, TodoItem};

/// Owns the todo items in insertion order and exposes the CRUD operations.
///
/// Operations on unknown ids are silent no-ops: the UI only ever issues ids it
/// has rendered itself. The incomplete/completed views are derived on every
/// call rather than stored.
pub struct TodoCollection {
    items: Vec<TodoItem>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl Default for TodoCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoCollection")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl TodoCollection {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidGenerator)
    }

    pub fn with_sources(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            items: Vec::new(),
            clock: Box::new(clock),
            ids: Box::new(ids),
            revision: 0,
        }
    }

    /// Append a new incomplete item. Empty titles are ignored.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        if title.is_empty() {
            return None;
        }

        let item = TodoItem::new(self.ids.next_id(), title.to_string(), self.clock.now());
        let id = item.id;
        log::debug!("Adding todo item {} ({:?})", id, item.title);
        self.items.push(item);
        self.touch();
        Some(id)
    }

    pub fn remove(&mut self, id: TodoId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            log::debug!("Removed todo item {}", id);
            self.touch();
        }
    }

    /// Flip the completion flag of `id`.
    ///
    /// `date_completed` is stamped with the current time on every toggle,
    /// including when the item goes back to incomplete. Only the matching
    /// item is stamped; the rest of the list keeps its dates.
    pub fn toggle_complete(&mut self, id: TodoId) {
        let now = self.clock.now();
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_completed = !item.is_completed;
            item.date_completed = Some(now);
            log::debug!("Toggled todo item {} (completed: {})", id, item.is_completed);
            self.touch();
        }
    }

    pub fn update_field(&mut self, id: TodoId, field: TodoField) {
        if let Some(position) = self.position(id) {
            log::debug!("Updating {} of todo item {}", field.name(), id);
            self.items[position] = self.items[position].with_field(field);
            self.touch();
        }
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn incomplete_items(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| !item.is_completed).collect()
    }

    pub fn completed_items(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| item.is_completed).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every mutation that changed the collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
