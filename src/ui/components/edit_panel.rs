//! Edit panel for the selected todo.
//!
//! The panel keeps only its text buffer; the item itself lives in the todo
//! list and every change goes back through [`Action::UpdateTodo`].

use crate::icons::IconService;
use crate::todo::{TodoField, TodoId, TodoItem};
use crate::ui::components::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct EditPanelComponent {
    item_id: Option<TodoId>,
    title_buffer: String,
    is_completed: bool,
    icons: IconService,
}

impl EditPanelComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            ..Default::default()
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Point the panel at `item`. The buffer is only reset when the item changes.
    pub fn bind(&mut self, item: Option<&TodoItem>) {
        match item {
            Some(item) if self.item_id != Some(item.id) => {
                self.item_id = Some(item.id);
                self.title_buffer = item.title.clone();
                self.is_completed = item.is_completed;
            }
            Some(item) => self.is_completed = item.is_completed,
            None => {
                self.item_id = None;
                self.title_buffer.clear();
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.item_id.is_some()
    }
}

impl Component for EditPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(id) = self.item_id else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => Action::CloseEditPanel,
            KeyCode::Enter => {
                if self.title_buffer.is_empty() {
                    Action::None
                } else {
                    Action::UpdateTodo {
                        id,
                        field: TodoField::Title(self.title_buffer.clone()),
                    }
                }
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::UpdateTodo {
                id,
                field: TodoField::IsCompleted(!self.is_completed),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.title_buffer.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.title_buffer.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let dialog_area = LayoutManager::centered_rect_lines(60, 9, rect);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} Edit Todo ", self.icons.edit());
        f.render_widget(create_dialog_block(&title, Color::Yellow), dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(dialog_area);

        f.render_widget(create_input_paragraph(&self.title_buffer, "Title", true), chunks[0]);

        let status = format!(
            "{} {}",
            self.icons.todo_status(self.is_completed),
            if self.is_completed { "Done" } else { "Not done" }
        );
        f.render_widget(Paragraph::new(status).style(Style::default().fg(Color::White)), chunks[1]);

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::ENTER_SAVE,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_D_DONE,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CLOSE,
            ]),
            chunks[3],
        );
    }
}
