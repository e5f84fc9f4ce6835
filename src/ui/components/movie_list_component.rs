use crate::constants::TITLE_MOVIES;
use crate::entities::movie::Movie;
use crate::icons::IconService;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// The filtered, sorted list of movies with a movable selection
pub struct MovieListComponent {
    pub movies: Vec<Movie>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub empty_message: String,
    pub icons: IconService,
    area: Rect,
}

impl Default for MovieListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieListComponent {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: true,
            empty_message: String::new(),
            icons: IconService::default(),
            area: Rect::default(),
        }
    }

    /// Replace the visible movies, keeping the selection on the same record
    /// when it is still visible
    pub fn update_data(&mut self, movies: Vec<Movie>, empty_message: impl Into<String>) {
        let selected_id = self.selected_movie().map(|movie| movie.id.clone());
        self.movies = movies;
        self.empty_message = empty_message.into();

        if let Some(index) = selected_id.and_then(|id| self.movies.iter().position(|movie| movie.id == id)) {
            self.selected_index = index;
        }
        self.update_list_state();
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.movies.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.movies.len() {
                self.selected_index = self.movies.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_movie_item(&self, movie: &Movie) -> ListItem<'static> {
        let year = movie
            .release_year()
            .map(|year| format!(" ({})", year))
            .unwrap_or_default();

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.movie()), Style::default().fg(Color::Cyan)),
            Span::styled(movie.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(year, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(movie.genre.clone(), Style::default().fg(Color::Magenta)),
            Span::raw("  "),
            Span::styled(self.icons.rating_stars(movie.rating), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", movie.rating_text()), Style::default().fg(Color::Gray)),
        ]);

        ListItem::new(line)
    }

    fn contains(&self, mouse: &MouseEvent) -> bool {
        mouse.column >= self.area.x
            && mouse.column < self.area.x + self.area.width
            && mouse.row >= self.area.y
            && mouse.row < self.area.y + self.area.height
    }
}

impl Component for MovieListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextMovie,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousMovie,
            KeyCode::Enter | KeyCode::Char('e') => match self.selected_movie() {
                Some(movie) => Action::EditMovie(movie.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_movie() {
                Some(movie) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    movie_id: movie.id.clone(),
                    title: movie.title.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.contains(&mouse) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the borders
                if mouse.row > self.area.y && mouse.row < self.area.y + self.area.height - 1 {
                    let local_index = (mouse.row - self.area.y - 1) as usize;
                    let clicked_index = self.list_state.offset() + local_index;
                    if clicked_index < self.movies.len() {
                        return Action::SelectMovie(clicked_index);
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp => Action::PreviousMovie,
            MouseEventKind::ScrollDown => Action::NextMovie,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextMovie => {
                if !self.movies.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.movies.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousMovie => {
                if !self.movies.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.movies.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::SelectMovie(index) => {
                if index < self.movies.len() {
                    self.selected_index = index;
                    self.update_list_state();
                }
                Action::FocusList
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", TITLE_MOVIES, self.movies.len()))
            .style(Style::default().fg(border_color));

        if self.movies.is_empty() {
            let empty = Paragraph::new(self.empty_message.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.movies.iter().map(|movie| self.create_movie_item(movie)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
