use crate::message::Message;
use crate::todo::{TodoField, TodoId};

#[derive(Debug, Clone)]
pub enum Action {
    // Add-item panel
    OpenInput,
    DismissInput,
    FocusInput,
    BlurInput,
    ToggleMultiple,
    SubmitInput, // Enter delivered through the document listener

    // Todo operations
    CompleteTodo(TodoId),
    DeleteTodo(TodoId),
    SelectTodo(TodoId),
    UpdateTodo { id: TodoId, field: TodoField },
    CloseEditPanel,

    // Session operations
    Login { email: String, password: String },
    CreateAccount { email: String, password: String },
    Logout,

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),
    ShowMessage(Message),
    CycleIconTheme,
    Tick,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
