//! Help panel and logs dialog overlays

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::layout::LayoutManager;

const HELP_TEXT: &str = r"
TODO LIST
---------
j/k, ↑/↓    Move between cards
Space       Toggle completion
d           Delete todo
Enter       Edit todo
a, +        Add todos

ADD PANEL
---------
Enter       Add the typed title
Tab         Focus/unfocus the title field
Ctrl+T, F2  Toggle 'Enter multiple'
Esc         Close the panel

EDIT PANEL
----------
Enter       Save title
Ctrl+D      Toggle done
Esc         Close

GENERAL
-------
?           Toggle this help
G           Show logs
I           Cycle icon theme
L           Log out
q, Ctrl+C   Quit
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, area: Rect) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(area.width, area.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, area);
        f.render_widget(Clear, help_area);

        let help_paragraph = Paragraph::new(HELP_TEXT.trim_start())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - press '?' or Esc to close ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}

/// Logs dialog component
pub struct LogsDialog;

impl LogsDialog {
    /// Render the newest log lines that fit
    pub fn render(f: &mut Frame, area: Rect, logs: &[String]) {
        let dialog_area = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, dialog_area);

        let visible = usize::from(dialog_area.height.saturating_sub(2));
        let text = if logs.is_empty() {
            "No log entries yet".to_string()
        } else {
            logs.iter().take(visible).cloned().collect::<Vec<_>>().join("\n")
        };

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", DIALOG_TITLE_LOGS))
                    .style(Style::default().fg(Color::Gray)),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, dialog_area);
    }
}
