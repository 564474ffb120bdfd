//! Lifecycle of the transient "add item" panel.
//!
//! ```text
//! Closed --open--> Open(unfocused) <--focus/blur--> Open(focused)
//! Open --dismiss | enter in single mode--> Exiting --animation_end--> Closed
//! ```
//!
//! `Exiting` keeps the panel on screen so the presentation layer can play its
//! close animation; the layer reports the end of that animation through
//! [`InputPanel::animation_end`].

use super::listener::{KeyListener, KeyListenerHub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Closed,
    Open,
    Exiting,
}

/// State machine for the add-item panel.
///
/// Holds the document-level Enter listener exactly while the panel is open,
/// focused and not exiting. The listener is re-evaluated after every
/// transition and released when the panel is dropped.
#[derive(Debug)]
pub struct InputPanel {
    phase: PanelPhase,
    focused: bool,
    enter_multiple: bool,
    text: String,
    hub: KeyListenerHub,
    listener: Option<KeyListener>,
}

impl InputPanel {
    pub fn new(hub: KeyListenerHub) -> Self {
        Self {
            phase: PanelPhase::Closed,
            focused: false,
            enter_multiple: false,
            text: String::new(),
            hub,
            listener: None,
        }
    }

    pub fn with_enter_multiple(mut self, enter_multiple: bool) -> Self {
        self.enter_multiple = enter_multiple;
        self
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// True while the panel is mounted, which includes the exit animation.
    pub fn is_open(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == PanelPhase::Exiting
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn enter_multiple(&self) -> bool {
        self.enter_multiple
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the Enter listener is currently registered with the hub.
    pub fn listener_active(&self) -> bool {
        self.listener.as_ref().is_some_and(KeyListener::is_attached)
    }

    pub fn open(&mut self) {
        if self.phase == PanelPhase::Closed {
            log::debug!("Input panel opened");
            self.phase = PanelPhase::Open;
            self.sync_listener();
        }
    }

    pub fn focus(&mut self) {
        if self.phase == PanelPhase::Open && !self.focused {
            self.focused = true;
            self.sync_listener();
        }
    }

    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.sync_listener();
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.focused {
            self.blur();
        } else {
            self.focus();
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// Flip multiple-entry mode. Only allowed while the panel is open.
    pub fn toggle_multiple(&mut self) {
        if self.phase == PanelPhase::Open {
            self.enter_multiple = !self.enter_multiple;
            log::debug!("Multiple entry mode: {}", self.enter_multiple);
        }
    }

    /// Start the close animation (overlay click, Esc).
    pub fn dismiss(&mut self) {
        if self.phase == PanelPhase::Open {
            log::debug!("Input panel exiting");
            self.phase = PanelPhase::Exiting;
            self.sync_listener();
        }
    }

    /// Signal from the presentation layer that the close animation finished.
    pub fn animation_end(&mut self) {
        if self.phase == PanelPhase::Exiting {
            log::debug!("Input panel closed");
            self.phase = PanelPhase::Closed;
            self.focused = false;
            self.sync_listener();
        }
    }

    /// Handle an Enter key press delivered through the document listener.
    ///
    /// Returns the text to submit when there is any. Outside multiple-entry
    /// mode a submission also starts the exit; Enter on empty text is
    /// ignored. Does nothing while the listener is not attached.
    pub fn enter(&mut self) -> Option<String> {
        if !self.listener_active() {
            return None;
        }

        let submission = (!self.text.is_empty()).then(|| self.text.clone());
        if submission.is_some() && !self.enter_multiple {
            self.dismiss();
        }
        submission
    }

    fn sync_listener(&mut self) {
        let wanted = self.phase == PanelPhase::Open && self.focused;
        match (wanted, self.listener.is_some()) {
            (true, false) => self.listener = Some(self.hub.attach()),
            (false, true) => self.listener = None,
            _ => {}
        }
    }
}
