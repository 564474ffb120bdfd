//! Todo list state: items, the add-item panel lifecycle and edit selection.
//!
//! Nothing in this module performs I/O or returns errors. Operations on ids
//! that are not in the collection, and empty titles, are ignored.
//!
//! - [`collection`] - ordered item storage and derived views
//! - [`input_panel`] - the Closed/Open/Exiting panel state machine
//! - [`listener`] - document-level key listener registry
//! - [`list`] - composition of the above, one method per UI event

pub mod clock;
pub mod collection;
pub mod input_panel;
pub mod item;
pub mod list;
pub mod listener;

pub use clock::{Clock, IdGenerator, ManualClock, SequentialIds, SystemClock, UuidGenerator};
pub use collection::TodoCollection;
pub use input_panel::{InputPanel, PanelPhase};
pub use item::{TodoField, TodoId, TodoItem};
pub use list::TodoList;
pub use listener::{KeyListener, KeyListenerHub, ListenerId};
