use crate::config::Config;
use crate::constants::PENDING_AUTH_TEXT;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::message::Message;
use crate::session::{SessionView, UserSession};
use crate::todo::KeyListenerHub;
use crate::ui::components::{HelpPanel, LoginComponent, LogsDialog, StatusBar, TodoListComponent};
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub message: Option<Message>,
    pub show_help: bool,
    pub show_logs: bool,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.message = None;
    }
}

pub struct AppComponent {
    // Component composition
    login: LoginComponent,
    todo_list: TodoListComponent,

    // Application state
    state: AppState,
    config: Config,
    icons: IconService,

    // Services
    session: UserSession,
    hub: KeyListenerHub,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(session: UserSession, config: Config, logger: Logger) -> Self {
        let hub = KeyListenerHub::new();
        let icons = IconService::new(config.display.icon_theme);
        let todo_list = TodoListComponent::new(hub.clone(), config.ui.clone(), config.display.clone());

        Self {
            login: LoginComponent::new(icons.clone()),
            todo_list,
            state: AppState::default(),
            config,
            icons,
            session,
            hub,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn todo_list(&self) -> &TodoListComponent {
        &self.todo_list
    }

    pub fn key_listener_hub(&self) -> &KeyListenerHub {
        &self.hub
    }

    /// Run the initial auth-state check
    pub async fn restore_session(&mut self) {
        self.session.restore().await;
        self.collect_session_message();
    }

    /// Handle keys that work regardless of the focused component
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.state.show_help {
            return match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::ShowHelp(false),
                _ => Action::None,
            };
        }
        if self.state.show_logs {
            return match key.code {
                KeyCode::Char('G') | KeyCode::Esc | KeyCode::Char('q') => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('I') => Action::CycleIconTheme,
            KeyCode::Char('L') => {
                self.logger.log("Global key: 'L' - logging out".to_string());
                Action::Logout
            }
            _ => Action::None,
        }
    }

    /// Whether the todo view is taking text input
    fn todo_captures_keys(&self) -> bool {
        let list = self.todo_list.list();
        list.panel().is_open() || list.selected_item().is_some()
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.state.show_help || self.state.show_logs {
            return self.handle_global_key(key);
        }

        match self.session.view() {
            SessionView::Pending => Action::None,
            SessionView::Login => self.login.handle_key_events(key),
            SessionView::Authenticated if self.todo_captures_keys() => self.todo_list.handle_key_events(key),
            SessionView::Authenticated => {
                let action = self.handle_global_key(key);
                if action.is_none() {
                    self.todo_list.handle_key_events(key)
                } else {
                    action
                }
            }
        }
    }

    fn collect_session_message(&mut self) {
        if let Some(message) = self.session.take_message() {
            self.logger.log(format!("Session: {}", message.text));
            self.state.message = Some(message);
        }
    }

    /// Start over with an empty todo list; dropping the old one releases its listener
    fn reset_todo_list(&mut self) {
        self.todo_list = TodoListComponent::new(self.hub.clone(), self.config.ui.clone(), self.config.display.clone());
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Login { email, password } => {
                self.logger.log(format!("Logging in as {}", email));
                self.session.login(&email, &password).await;
                self.after_sign_in_attempt();
                Action::None
            }
            Action::CreateAccount { email, password } => {
                self.logger.log(format!("Creating account for {}", email));
                self.session.create_account(&email, &password).await;
                self.after_sign_in_attempt();
                Action::None
            }
            Action::Logout => {
                self.session.logout().await;
                self.collect_session_message();
                if !self.session.state().is_authenticated {
                    self.reset_todo_list();
                    self.login.reset();
                }
                Action::None
            }
            Action::ShowHelp(show) => {
                self.state.show_help = show;
                Action::None
            }
            Action::ShowLogs(show) => {
                self.state.show_logs = show;
                Action::None
            }
            Action::ShowMessage(message) => {
                self.state.message = Some(message);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.config.display.icon_theme = self.icons.theme();
                self.todo_list.cycle_icon_theme();
                Action::None
            }
            other => other,
        }
    }

    fn after_sign_in_attempt(&mut self) {
        self.collect_session_message();
        if self.session.state().is_authenticated {
            self.login.reset();
        } else {
            self.login.reset_password();
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.state.clear_messages();
                self.route_key(key)
            }
            EventType::Mouse(mouse) if self.session.view() == SessionView::Authenticated => {
                self.todo_list.handle_mouse_events(mouse)
            }
            EventType::Tick => Action::Tick,
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
        Ok(())
    }

    /// Route an action through the components, then handle what is left at app level
    pub async fn dispatch(&mut self, action: Action) {
        let action = if self.session.view() == SessionView::Authenticated {
            self.todo_list.update(action)
        } else {
            action
        };

        let _final_action = self.handle_app_action(action).await;
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (main_area, status_area) = LayoutManager::main_layout(rect);
        let view = self.session.view();

        match view {
            SessionView::Pending => {
                let pending = Paragraph::new(PENDING_AUTH_TEXT)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray));
                f.render_widget(pending, LayoutManager::centered_rect_lines(50, 1, main_area));
            }
            SessionView::Login => self.login.render(f, main_area),
            SessionView::Authenticated => self.todo_list.render(f, main_area),
        }

        StatusBar::render(f, status_area, view, self.state.message.as_ref(), &self.icons);

        if self.state.show_logs {
            LogsDialog::render(f, main_area, &self.logger.get_logs());
        }
        if self.state.show_help {
            HelpPanel::render(f, main_area);
        }
    }
}
