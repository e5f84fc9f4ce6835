//! Details pane for the selected movie

use crate::config::DisplayConfig;
use crate::constants::{EMPTY_NO_SELECTION, TITLE_DETAILS};
use crate::entities::movie::Movie;
use crate::icons::IconService;
use crate::utils::datetime;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

fn field_line(icon: &str, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} {}: ", icon, label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Build the detail lines for `movie`
pub fn detail_lines(movie: &Movie, icons: &IconService, display: &DisplayConfig) -> Vec<Line<'static>> {
    let release = match movie.release_date {
        Some(date) => format!(
            "{} ({})",
            datetime::format_release_date(Some(date), &display.date_format),
            datetime::describe_release(date, chrono::Local::now().date_naive())
        ),
        None => datetime::format_release_date(None, &display.date_format),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(icons.genre(), "Genre", movie.genre.clone()),
        Line::from(vec![
            Span::styled(format!("{} Rating: ", icons.rating_icon()), Style::default().fg(Color::Gray)),
            Span::styled(icons.rating_stars(movie.rating), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", movie.rating_text()), Style::default().fg(Color::White)),
        ]),
        field_line(icons.release_date(), "Release Date", release),
        field_line(
            icons.image(),
            "Image",
            movie.image_url.clone().unwrap_or_else(|| "none".to_string()),
        ),
    ];

    if display.show_descriptions && !movie.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            movie.description.clone(),
            Style::default().fg(Color::White),
        )));
    }

    lines
}

pub fn render_movie_detail(
    f: &mut Frame,
    rect: Rect,
    movie: Option<&Movie>,
    icons: &IconService,
    display: &DisplayConfig,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", TITLE_DETAILS))
        .style(Style::default().fg(Color::Gray));

    let lines = match movie {
        Some(movie) => detail_lines(movie, icons, display),
        None => vec![Line::from(Span::styled(EMPTY_NO_SELECTION, Style::default().fg(Color::DarkGray)))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, rect);
}
