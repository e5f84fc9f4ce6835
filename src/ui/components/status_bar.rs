//! Status bar component

use crate::catalog::SortKey;
use crate::constants::{STATUS_LOADING, STATUS_SHORTCUTS, TITLE_APP};
use crate::icons::IconService;
use crate::ui::core::Focus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status line reports
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub visible: usize,
    pub total: usize,
    pub sort: SortKey,
    pub query: String,
    pub focus: Focus,
    pub editing: bool,
    pub loading: bool,
    pub in_flight: usize,
}

impl StatusInfo {
    /// Left-hand summary: counts, sort, query and in-flight requests
    pub fn summary(&self, icons: &IconService) -> String {
        let mut parts = vec![format!("{}/{} movies", self.visible, self.total)];
        if self.sort != SortKey::None {
            parts.push(format!("sort: {}", self.sort));
        }
        if !self.query.is_empty() {
            parts.push(format!("{} \"{}\"", icons.search(), self.query));
        }
        if self.in_flight > 0 {
            parts.push(format!("{} {} pending", icons.loading(), self.in_flight));
        }
        parts.join(" • ")
    }

    /// Mode label for the current focus
    pub fn mode(&self) -> &'static str {
        match self.focus {
            Focus::List => "LIST",
            Focus::Search => "SEARCH",
            Focus::Form if self.editing => "EDIT",
            Focus::Form => "ADD",
        }
    }
}

/// Render the status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo, icons: &IconService) {
    let mode_color = match info.focus {
        Focus::List => Color::Cyan,
        Focus::Search => Color::Yellow,
        Focus::Form => Color::Green,
    };

    let right = if info.loading {
        Span::styled(STATUS_LOADING, Style::default().fg(Color::Yellow))
    } else {
        Span::styled(STATUS_SHORTCUTS, Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} {} ", icons.movie(), TITLE_APP),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", info.mode()), Style::default().fg(Color::Black).bg(mode_color)),
        Span::styled(format!(" {} ", info.summary(icons)), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        right,
    ]);

    f.render_widget(Paragraph::new(line), area);
}
