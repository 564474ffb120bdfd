use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a todo item, unique within its collection.
pub type TodoId = Uuid;

/// A single task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
    pub date_created: DateTime<Utc>,
    pub date_completed: Option<DateTime<Utc>>,
}

impl TodoItem {
    pub fn new(id: TodoId, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            date_created: now,
            date_completed: None,
        }
    }

    /// Returns a copy of this item with `field` replaced.
    pub fn with_field(&self, field: TodoField) -> Self {
        let mut item = self.clone();
        match field {
            TodoField::Title(title) => item.title = title,
            TodoField::IsCompleted(is_completed) => item.is_completed = is_completed,
        }
        item
    }
}

/// The fields of a [`TodoItem`] that can be edited after creation.
///
/// `id` and the timestamps are not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoField {
    Title(String),
    IsCompleted(bool),
}

impl TodoField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::IsCompleted(_) => "is_completed",
        }
    }
}
