//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Todo card status icons
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub todo_title: &'static str,
    pub done_title: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub user: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

/// Switch control icons
#[derive(Debug, Clone)]
pub struct SwitchIcons {
    pub on: &'static str,
    pub off: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_status: TodoStatusIcons,
    pub ui: UiIcons,
    pub switch: SwitchIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                todo_title: "📝",
                done_title: "🎉",
                add: "➕",
                edit: "✏️",
                user: "👤",
                error: "❌",
                info: "💡",
            },
            switch: SwitchIcons { on: "🟢", off: "⚪" },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                todo_title: "▶",
                done_title: "✔",
                add: "+",
                edit: "✎",
                user: "◉",
                error: "✗",
                info: "ⓘ",
            },
            switch: SwitchIcons { on: "●", off: "○" },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            todo_status: TodoStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                todo_title: ">",
                done_title: "#",
                add: "+",
                edit: "*",
                user: "@",
                error: "X",
                info: "i",
            },
            switch: SwitchIcons { on: "(on)", off: "(off)" },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.icons().todo_status.pending
    }

    #[must_use]
    pub fn todo_completed(&self) -> &'static str {
        self.icons().todo_status.completed
    }

    #[must_use]
    pub fn todo_status(&self, is_completed: bool) -> &'static str {
        if is_completed {
            self.todo_completed()
        } else {
            self.todo_pending()
        }
    }

    #[must_use]
    pub fn todo_title(&self) -> &'static str {
        self.icons().ui.todo_title
    }

    #[must_use]
    pub fn done_title(&self) -> &'static str {
        self.icons().ui.done_title
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().ui.add
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().ui.edit
    }

    #[must_use]
    pub fn user(&self) -> &'static str {
        self.icons().ui.user
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn switch(&self, on: bool) -> &'static str {
        let switch = self.icons().switch;
        if on {
            switch.on
        } else {
            switch.off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_ascii_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.todo_status(false), "[ ]");
        assert_eq!(service.todo_status(true), "[X]");
        assert_eq!(service.switch(true), "(on)");
    }

    #[test]
    fn test_unicode_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.todo_pending(), "□");
        assert_eq!(service.todo_completed(), "✓");
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: IconTheme = serde_json::from_str("\"emoji\"").unwrap();
        assert_eq!(theme, IconTheme::Emoji);
    }
}
