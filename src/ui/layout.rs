//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        // Top area: everything except 1 line for status
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        (top_area, status_area)
    }

    /// Split the list area into the incomplete list and the "Done" list.
    ///
    /// The done list only gets space when it has items; it takes at most
    /// half of the area.
    #[must_use]
    pub fn todo_lists_layout(area: Rect, done_count: usize) -> (Rect, Option<Rect>) {
        if done_count == 0 {
            return (area, None);
        }

        // +2 for borders
        let wanted = u16::try_from(done_count).unwrap_or(u16::MAX).saturating_add(2);
        let done_height = wanted.min(area.height / 2).max(3.min(area.height));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(done_height)])
            .split(area);

        (chunks[0], Some(chunks[1]))
    }

    /// A rectangle of fixed size anchored to the bottom-right corner, with a margin
    #[must_use]
    pub fn bottom_right_rect(width: u16, height: u16, margin: u16, area: Rect) -> Rect {
        let width = width.min(area.width.saturating_sub(margin));
        let height = height.min(area.height.saturating_sub(margin));
        let x = area.x + area.width.saturating_sub(width + margin);
        let y = area.y + area.height.saturating_sub(height + margin);
        Rect::new(x, y, width, height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 60 };
        (help_width, help_height)
    }

    /// Whether a terminal cell lies inside `rect`
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_reserves_status_line() {
        let (top, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(top.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_done_list_hidden_when_empty() {
        let area = Rect::new(0, 0, 80, 20);
        let (todo, done) = LayoutManager::todo_lists_layout(area, 0);
        assert_eq!(todo, area);
        assert!(done.is_none());
    }

    #[test]
    fn test_done_list_capped_at_half() {
        let area = Rect::new(0, 0, 80, 20);
        let (todo, done) = LayoutManager::todo_lists_layout(area, 50);
        let done = done.unwrap();
        assert_eq!(done.height, 10);
        assert_eq!(todo.height + done.height, 20);
    }

    #[test]
    fn test_bottom_right_rect() {
        let rect = LayoutManager::bottom_right_rect(10, 3, 1, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(69, 20, 10, 3));
        assert!(LayoutManager::contains(rect, 69, 20));
        assert!(!LayoutManager::contains(rect, 79, 20));
    }
}
