//! Constants used throughout the application
//!
//! This module centralizes UI text, messages and limits so they stay
//! consistent between components.

// UI Section Headers
pub const HEADER_TODO: &str = "Todo";
pub const HEADER_DONE: &str = "Done";

// Control labels
pub const LABEL_INPUT_TITLE: &str = "Title";
pub const LABEL_ENTER_MULTIPLE: &str = "Enter multiple";
pub const LABEL_FAB: &str = "Add";

// Session messages
pub const ERROR_INVALID_LOGIN: &str = "Invalid username/password";
pub const ERROR_LOGIN_FAILED: &str = "Failed to log in";
pub const ERROR_LOGOUT_FAILED: &str = "Failed to log out";
pub const ERROR_ACCOUNT_CREATE_FAILED: &str = "Failed to create account";

// Todo messages
pub const INFO_TODO_DELETED: &str = "Todo deleted";
pub const INFO_TODO_UPDATED: &str = "Todo updated";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const PENDING_AUTH_TEXT: &str = "Checking session...";

// UI Layout Constants
/// Width of the add-item panel in columns
pub const INPUT_PANEL_WIDTH: u16 = 44;
/// Height of the add-item panel in lines
pub const INPUT_PANEL_HEIGHT: u16 = 5;
/// Minimum number of close-animation frames
pub const EXIT_ANIMATION_MIN_FRAMES: u16 = 1;
/// Maximum number of close-animation frames
pub const EXIT_ANIMATION_MAX_FRAMES: u16 = 30;
/// Default number of close-animation frames
pub const EXIT_ANIMATION_DEFAULT_FRAMES: u16 = 3;
/// Number of entries the in-memory log buffer keeps
pub const MAX_LOG_ENTRIES: usize = 1000;
