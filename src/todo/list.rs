use super::clock::{Clock, IdGenerator};
use super::collection::TodoCollection;
use super::input_panel::InputPanel;
use super::item::{TodoField, TodoId, TodoItem};
use super::listener::KeyListenerHub;

/// The todo list: item collection, add-item panel and edit selection.
///
/// Every method maps to one UI event handler and runs synchronously.
#[derive(Debug)]
pub struct TodoList {
    collection: TodoCollection,
    panel: InputPanel,
    selected_id: Option<TodoId>,
}

impl TodoList {
    pub fn new(hub: KeyListenerHub) -> Self {
        Self::from_parts(TodoCollection::new(), InputPanel::new(hub))
    }

    pub fn with_sources(hub: KeyListenerHub, clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self::from_parts(TodoCollection::with_sources(clock, ids), InputPanel::new(hub))
    }

    pub fn from_parts(collection: TodoCollection, panel: InputPanel) -> Self {
        Self {
            collection,
            panel,
            selected_id: None,
        }
    }

    pub fn collection(&self) -> &TodoCollection {
        &self.collection
    }

    pub fn panel(&self) -> &InputPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut InputPanel {
        &mut self.panel
    }

    pub fn items(&self) -> &[TodoItem] {
        self.collection.items()
    }

    pub fn incomplete_items(&self) -> Vec<&TodoItem> {
        self.collection.incomplete_items()
    }

    pub fn completed_items(&self) -> Vec<&TodoItem> {
        self.collection.completed_items()
    }

    /// Add an item and clear the pending input text. Empty titles are ignored.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        let id = self.collection.add(title)?;
        self.panel.clear_text();
        Some(id)
    }

    pub fn remove(&mut self, id: TodoId) {
        self.collection.remove(id);
    }

    pub fn toggle_complete(&mut self, id: TodoId) {
        self.collection.toggle_complete(id);
    }

    /// Apply an edit from the edit panel. Any update closes the panel.
    pub fn update_field(&mut self, id: TodoId, field: TodoField) {
        self.collection.update_field(id, field);
        self.selected_id = None;
    }

    pub fn select(&mut self, id: TodoId) {
        self.selected_id = Some(id);
    }

    pub fn close_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.selected_id
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.selected_id.and_then(|id| self.collection.get(id))
    }

    /// Activate the add affordance.
    pub fn open_input(&mut self) {
        self.panel.open();
    }

    /// Overlay click or Esc while the panel is open.
    pub fn dismiss_input(&mut self) {
        self.panel.dismiss();
    }

    pub fn input_animation_end(&mut self) {
        self.panel.animation_end();
    }

    /// Enter pressed at document level. Returns the id of the added item.
    pub fn press_enter(&mut self) -> Option<TodoId> {
        let text = self.panel.enter()?;
        self.add(&text)
    }
}
