//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{LIST_MIN_WIDTH, SEARCH_BAR_HEIGHT};

/// Rows taken by the form: one bordered input per field plus the button line
pub const FORM_HEIGHT: u16 = 6 * 3 + 1 + 2;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into search bar, body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Split the body into the movie list and the side column.
    ///
    /// The side column keeps `side_width` columns unless that would squeeze
    /// the list below its minimum width.
    #[must_use]
    pub fn body_layout(area: Rect, side_width: u16) -> Vec<Rect> {
        let side_width = side_width.min(area.width.saturating_sub(LIST_MIN_WIDTH));

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(side_width)])
            .split(area)
            .to_vec()
    }

    /// Split the side column into details (top) and form (bottom)
    #[must_use]
    pub fn side_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FORM_HEIGHT)])
            .split(area)
            .to_vec()
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

    /// Truncate `text` to `max_width` characters, marking the cut with `…`
    #[must_use]
    pub fn truncate(text: &str, max_width: usize) -> String {
        if text.chars().count() <= max_width {
            return text.to_string();
        }
        if max_width == 0 {
            return String::new();
        }
        let mut truncated: String = text.chars().take(max_width - 1).collect();
        truncated.push('…');
        truncated
    }
}
