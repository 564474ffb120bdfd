//! Login screen shown while no user is signed in.

use crate::icons::IconService;
use crate::ui::components::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts, InstructionShortcut,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

const LOGIN_SHORTCUT: InstructionShortcut = ("Enter", Color::Green, " Log in");
const CREATE_SHORTCUT: InstructionShortcut = ("^N", Color::Cyan, " Create account");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginComponent {
    pub email: String,
    pub password: String,
    pub field: LoginField,
    icons: IconService,
}

impl LoginComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            ..Default::default()
        }
    }

    /// Forget the typed password, keeping the email for the next attempt
    pub fn reset_password(&mut self) {
        self.password.clear();
        self.field = LoginField::Password;
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.field = LoginField::Email;
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.field = match self.field {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                Action::None
            }
            KeyCode::Enter => Action::Login {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            KeyCode::Char('n') if ctrl => Action::CreateAccount {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            KeyCode::Char(c) if !ctrl => {
                self.active_buffer().push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.active_buffer().pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dialog_area = LayoutManager::centered_rect_lines(50, 11, rect);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} Sign in ", self.icons.user());
        f.render_widget(create_dialog_block(&title, Color::Cyan), dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(dialog_area);

        let masked = "*".repeat(self.password.chars().count());
        f.render_widget(
            create_input_paragraph(&self.email, "Email", self.field == LoginField::Email),
            chunks[0],
        );
        f.render_widget(
            create_input_paragraph(&masked, "Password", self.field == LoginField::Password),
            chunks[1],
        );
        f.render_widget(
            create_instructions_paragraph(&[
                LOGIN_SHORTCUT,
                shortcuts::SEPARATOR,
                CREATE_SHORTCUT,
                shortcuts::SEPARATOR,
                shortcuts::TAB_FOCUS,
            ]),
            chunks[3],
        );
    }
}
