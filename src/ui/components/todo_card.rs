use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::todo::TodoItem;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One todo rendered as a list row: status icon, title and optional dates.
pub struct TodoCard<'a> {
    pub item: &'a TodoItem,
    pub icons: &'a IconService,
}

impl<'a> TodoCard<'a> {
    pub fn new(item: &'a TodoItem, icons: &'a IconService) -> Self {
        Self { item, icons }
    }

    pub fn render(&self, selected: bool, display_config: &DisplayConfig) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        let highlight = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let status_style = if selected { highlight } else { Style::default().fg(Color::White) };
        line_spans.push(Span::styled(
            format!("{} ", self.icons.todo_status(self.item.is_completed)),
            status_style,
        ));

        let content_style = match (selected, self.item.is_completed) {
            (true, _) => highlight,
            (false, true) => Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            (false, false) => Style::default().fg(Color::White),
        };
        line_spans.push(Span::styled(self.item.title.clone(), content_style));

        if display_config.show_dates {
            let date_style = Style::default().fg(Color::Gray);
            line_spans.push(Span::styled(
                format!("  created {}", format_date(self.item.date_created, &display_config.date_format)),
                date_style,
            ));
            if let (true, Some(completed)) = (self.item.is_completed, self.item.date_completed) {
                line_spans.push(Span::styled(
                    format!("  done {}", format_date(completed, &display_config.date_format)),
                    date_style,
                ));
            }
        }

        ListItem::new(Line::from(line_spans))
    }
}

fn format_date(date: DateTime<Utc>, format: &str) -> String {
    date.with_timezone(&Local).format(format).to_string()
}
