//! The todo list view: card lists, add-item panel and edit panel.
//!
//! This component owns the [`TodoList`] state. Key and mouse events become
//! [`Action`]s, and [`Component::update`] applies the todo actions to the
//! list. Everything else is passed back to the app.

use crate::config::{DisplayConfig, UiConfig};
use crate::constants::{
    HEADER_DONE, HEADER_TODO, INFO_TODO_DELETED, INFO_TODO_UPDATED, INPUT_PANEL_HEIGHT, INPUT_PANEL_WIDTH,
    LABEL_ENTER_MULTIPLE, LABEL_FAB, LABEL_INPUT_TITLE,
};
use crate::icons::IconService;
use crate::message::Message;
use crate::todo::{InputPanel, KeyListenerHub, TodoCollection, TodoId, TodoItem, TodoList};
use crate::ui::components::common::{create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::components::edit_panel::EditPanelComponent;
use crate::ui::components::todo_card::TodoCard;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListState, Paragraph},
    Frame,
};

pub struct TodoListComponent {
    list: TodoList,
    edit_panel: EditPanelComponent,
    /// Index into incomplete items followed by completed items
    cursor: usize,
    todo_state: ListState,
    done_state: ListState,
    icons: IconService,
    display_config: DisplayConfig,
    ui_config: UiConfig,
    /// Remaining close-animation frames while the panel is exiting
    exit_frames_left: Option<u16>,
    // Areas from the last render, for mouse hit-testing
    panel_area: Option<Rect>,
    input_area: Option<Rect>,
    fab_area: Option<Rect>,
}

impl TodoListComponent {
    pub fn new(hub: KeyListenerHub, ui_config: UiConfig, display_config: DisplayConfig) -> Self {
        let panel = InputPanel::new(hub).with_enter_multiple(ui_config.enter_multiple_default);
        let list = TodoList::from_parts(TodoCollection::new(), panel);
        Self::with_list(list, ui_config, display_config)
    }

    pub fn with_list(list: TodoList, ui_config: UiConfig, display_config: DisplayConfig) -> Self {
        let icons = IconService::new(display_config.icon_theme);
        Self {
            list,
            edit_panel: EditPanelComponent::new(icons.clone()),
            cursor: 0,
            todo_state: ListState::default(),
            done_state: ListState::default(),
            icons,
            display_config,
            ui_config,
            exit_frames_left: None,
            panel_area: None,
            input_area: None,
            fab_area: None,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cycle_icon_theme(&mut self) {
        self.icons.cycle_icon_theme();
        self.display_config.icon_theme = self.icons.theme();
        self.edit_panel.set_icons(self.icons.clone());
    }

    /// Items in display order: incomplete first, then completed.
    fn ordered_items(&self) -> Vec<&TodoItem> {
        let mut items = self.list.incomplete_items();
        items.extend(self.list.completed_items());
        items
    }

    fn item_at_cursor(&self) -> Option<TodoId> {
        self.ordered_items().get(self.cursor).map(|item| item.id)
    }

    fn clamp_cursor(&mut self) {
        let len = self.list.items().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    fn next_item(&mut self) {
        let len = self.list.items().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    fn previous_item(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn open_input(&mut self) {
        self.list.open_input();
        if self.ui_config.autofocus_input {
            self.list.panel_mut().focus();
        }
    }

    /// Advance the close animation; reports its end to the panel.
    fn tick_animation(&mut self) {
        if !self.list.panel().is_exiting() {
            self.exit_frames_left = None;
            return;
        }

        let left = self
            .exit_frames_left
            .get_or_insert(self.ui_config.exit_animation_frames);
        *left = left.saturating_sub(1);
        if *left == 0 {
            self.exit_frames_left = None;
            self.list.input_animation_end();
        }
    }

    fn handle_panel_key(&mut self, key: KeyEvent) -> Action {
        let panel = self.list.panel();
        let (focused, exiting, listening) = (panel.is_focused(), panel.is_exiting(), panel.listener_active());

        // Document-level listener: only sees Enter while attached
        if key.code == KeyCode::Enter {
            return if listening { Action::SubmitInput } else { Action::None };
        }

        if exiting {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Action::DismissInput,
            KeyCode::Tab if focused => Action::BlurInput,
            KeyCode::Tab => Action::FocusInput,
            KeyCode::F(2) => Action::ToggleMultiple,
            KeyCode::Char('t') if ctrl => Action::ToggleMultiple,
            KeyCode::Char(c) if focused && !ctrl => {
                self.list.panel_mut().push_char(c);
                Action::None
            }
            KeyCode::Backspace if focused => {
                self.list.panel_mut().pop_char();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('+') => Action::OpenInput,
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_item();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous_item();
                Action::None
            }
            KeyCode::Char(' ') => self.item_at_cursor().map_or(Action::None, Action::CompleteTodo),
            KeyCode::Char('d') | KeyCode::Delete => self.item_at_cursor().map_or(Action::None, Action::DeleteTodo),
            KeyCode::Enter => self.item_at_cursor().map_or(Action::None, Action::SelectTodo),
            _ => Action::None,
        }
    }

    fn render_lists(&mut self, f: &mut Frame, area: Rect) {
        let incomplete = self.list.incomplete_items();
        let completed = self.list.completed_items();
        let (todo_area, done_area) = LayoutManager::todo_lists_layout(area, completed.len());
        let cursor = self.cursor;

        let todo_cards: Vec<_> = incomplete
            .iter()
            .enumerate()
            .map(|(i, item)| TodoCard::new(item, &self.icons).render(i == cursor, &self.display_config))
            .collect();
        let todo_title = format!(" {} {} ({}) ", self.icons.todo_title(), HEADER_TODO, incomplete.len());
        let todo_list = List::new(todo_cards).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(todo_title),
        );
        self.todo_state
            .select((cursor < incomplete.len()).then_some(cursor));

        let done_offset = incomplete.len();
        let done = done_area.map(|done_area| {
            let done_cards: Vec<_> = completed
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    TodoCard::new(item, &self.icons).render(done_offset + i == cursor, &self.display_config)
                })
                .collect();
            let done_title = format!(" {} {} ({}) ", self.icons.done_title(), HEADER_DONE, completed.len());
            let done_list = List::new(done_cards).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(done_title)
                    .style(Style::default().fg(Color::DarkGray)),
            );
            (done_area, done_list)
        });
        self.done_state
            .select(cursor.checked_sub(done_offset).filter(|i| *i < completed.len()));

        f.render_stateful_widget(todo_list, todo_area, &mut self.todo_state);
        if let Some((done_area, done_list)) = done {
            f.render_stateful_widget(done_list, done_area, &mut self.done_state);
        }
    }

    fn render_fab(&mut self, f: &mut Frame, area: Rect) {
        let label = format!("[{}] {}", self.icons.add(), LABEL_FAB);
        let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX).saturating_add(4);
        let fab_area = LayoutManager::bottom_right_rect(width, 3, 1, area);
        let fab = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(Clear, fab_area);
        f.render_widget(fab, fab_area);
        self.fab_area = Some(fab_area);
    }

    fn render_input_panel(&mut self, f: &mut Frame, area: Rect) {
        let panel = self.list.panel();
        let exiting = panel.is_exiting();

        // Overlay: dim the list while the panel is up
        let overlay_style = if exiting {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        f.render_widget(Block::default().style(overlay_style), area);

        // The close animation shrinks the panel a little every frame
        let height = match (exiting, self.exit_frames_left) {
            (true, Some(left)) => {
                let total = self.ui_config.exit_animation_frames.max(1);
                (INPUT_PANEL_HEIGHT * left / total).max(1)
            }
            _ => INPUT_PANEL_HEIGHT,
        };
        let panel_area = LayoutManager::bottom_right_rect(INPUT_PANEL_WIDTH, height, 1, area);
        f.render_widget(Clear, panel_area);
        self.panel_area = Some(panel_area);

        if exiting {
            let text = Paragraph::new(panel.text().to_string())
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(text, panel_area);
            self.input_area = None;
            return;
        }

        let switch_area = Rect::new(panel_area.x, panel_area.y, panel_area.width, 1);
        let input_area = Rect::new(
            panel_area.x,
            panel_area.y + 1,
            panel_area.width,
            panel_area.height.saturating_sub(2).min(3),
        );
        let help_area = Rect::new(
            panel_area.x,
            panel_area.y + panel_area.height.saturating_sub(1),
            panel_area.width,
            1,
        );

        let switch = Paragraph::new(format!(
            "{} {}",
            LABEL_ENTER_MULTIPLE,
            self.icons.switch(panel.enter_multiple())
        ))
        .alignment(Alignment::Right)
        .style(Style::default().fg(if panel.enter_multiple() { Color::Green } else { Color::Gray }));
        f.render_widget(switch, switch_area);

        f.render_widget(
            create_input_paragraph(panel.text(), LABEL_INPUT_TITLE, panel.is_focused()),
            input_area,
        );
        self.input_area = Some(input_area);

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::ENTER_ADD,
                shortcuts::SEPARATOR,
                shortcuts::TAB_FOCUS,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_T_MULTIPLE,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]),
            help_area,
        );
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.edit_panel.is_visible() {
            return self.edit_panel.handle_key_events(key);
        }

        if self.list.panel().is_open() {
            return self.handle_panel_key(key);
        }

        self.handle_list_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.ui_config.mouse_enabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if self.edit_panel.is_visible() {
            return Action::None;
        }

        let panel = self.list.panel();
        if panel.is_open() {
            if panel.is_exiting() {
                return Action::None;
            }
            let inside = |area: Option<Rect>| area.is_some_and(|a| LayoutManager::contains(a, mouse.column, mouse.row));
            if inside(self.input_area) {
                Action::FocusInput
            } else if inside(self.panel_area) {
                Action::BlurInput
            } else {
                // Click on the overlay
                Action::DismissInput
            }
        } else if self
            .fab_area
            .is_some_and(|a| LayoutManager::contains(a, mouse.column, mouse.row))
        {
            Action::OpenInput
        } else {
            Action::None
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = match action {
            Action::OpenInput => {
                self.open_input();
                Action::None
            }
            Action::DismissInput => {
                self.list.dismiss_input();
                Action::None
            }
            Action::FocusInput => {
                self.list.panel_mut().focus();
                Action::None
            }
            Action::BlurInput => {
                self.list.panel_mut().blur();
                Action::None
            }
            Action::ToggleMultiple => {
                self.list.panel_mut().toggle_multiple();
                Action::None
            }
            Action::SubmitInput => {
                self.list.press_enter();
                Action::None
            }
            Action::CompleteTodo(id) => {
                self.list.toggle_complete(id);
                Action::None
            }
            Action::DeleteTodo(id) => {
                let before = self.list.collection().len();
                self.list.remove(id);
                if self.list.collection().len() < before {
                    Action::ShowMessage(Message::info(INFO_TODO_DELETED))
                } else {
                    Action::None
                }
            }
            Action::SelectTodo(id) => {
                self.list.select(id);
                Action::None
            }
            Action::UpdateTodo { id, field } => {
                self.list.update_field(id, field);
                Action::ShowMessage(Message::info(INFO_TODO_UPDATED))
            }
            Action::CloseEditPanel => {
                self.list.close_selection();
                Action::None
            }
            Action::Tick => {
                self.tick_animation();
                Action::None
            }
            other => other,
        };

        self.clamp_cursor();
        self.edit_panel.bind(self.list.selected_item());
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_lists(f, rect);

        if self.list.panel().is_open() {
            self.fab_area = None;
            self.render_input_panel(f, rect);
        } else {
            self.panel_area = None;
            self.input_area = None;
            self.render_fab(f, rect);
        }

        self.edit_panel.render(f, rect);
    }
}
