//! Reusable UI components

pub mod common;
pub mod edit_panel;
pub mod help_panel;
pub mod login_component;
pub mod status_bar;
pub mod todo_card;
pub mod todo_list_component;

// Component exports
pub use edit_panel::EditPanelComponent;
pub use help_panel::{HelpPanel, LogsDialog};
pub use login_component::LoginComponent;
pub use status_bar::StatusBar;
pub use todo_card::TodoCard;
pub use todo_list_component::TodoListComponent;
