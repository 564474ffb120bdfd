//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::message::Message;
use crate::session::SessionView;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given view when there is no message
    pub fn shortcuts(view: SessionView) -> &'static str {
        match view {
            SessionView::Pending => "Ctrl+C: quit",
            SessionView::Login => "Tab: switch field • Enter: log in • Ctrl+N: create account • Ctrl+C: quit",
            SessionView::Authenticated => {
                "a: add • Space: toggle • d: delete • Enter: edit • L: log out • ?: help • q: quit"
            }
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, view: SessionView, message: Option<&Message>, icons: &IconService) {
        let (status_text, status_color) = match message {
            Some(message) if message.is_error() => (format!("{} {}", icons.error(), message.text), Color::Red),
            Some(message) => (format!("{} {}", icons.info(), message.text), Color::Green),
            None => (Self::shortcuts(view).to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
