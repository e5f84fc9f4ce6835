use crate::catalog::SortKey;
use crate::constants::TITLE_SEARCH;
use crate::icons::IconService;
use crate::ui::components::text_input;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Live search box with the current sort shown alongside
pub struct SearchBarComponent {
    pub query: String,
    pub cursor_position: usize,
    pub focused: bool,
    pub sort: SortKey,
    pub icons: IconService,
}

impl Default for SearchBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBarComponent {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            focused: false,
            sort: SortKey::default(),
            icons: IconService::default(),
        }
    }
}

impl Component for SearchBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => Action::FocusList,
            KeyCode::Esc => Action::ClearSearch,
            _ => {
                if text_input::handle_edit_key(&mut self.query, &mut self.cursor_position, key) {
                    Action::SearchChanged(self.query.clone())
                } else {
                    Action::None
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ClearSearch => {
                self.query.clear();
                self.cursor_position = 0;
                action
            }
            Action::FocusSearch => {
                self.cursor_position = self.query.chars().count();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };

        let sort_title = Line::from(vec![
            Span::styled(" s ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{} ", self.sort), Style::default().fg(Color::White)),
        ])
        .alignment(Alignment::Right);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} ", self.icons.search(), TITLE_SEARCH))
            .title(sort_title)
            .style(Style::default().fg(border_color));

        let content = if self.query.is_empty() && !self.focused {
            Line::from(Span::styled("Press / to search", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::styled(self.query.as_str(), Style::default().fg(Color::White)))
        };

        f.render_widget(Paragraph::new(content).block(block), rect);

        if self.focused {
            let column = text_input::cursor_column(&self.query, self.cursor_position);
            f.set_cursor_position((rect.x + 1 + column, rect.y + 1));
        }
    }
}
