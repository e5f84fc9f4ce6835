use super::common::{self, shortcuts};
use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
CINELIST - Movie Catalogue
==========================

MOVIE LIST
----------
j/k ↓/↑     Move selection
Enter, e    Edit selected movie in the form
d           Delete selected movie (with confirmation)
a, n        Add a new movie
/           Search by title or genre
s           Cycle sort: none → title → genre → rating
r           Reload movies from the server

SEARCH BOX
----------
typing      Filter the list as you type
Enter       Back to the list, keep the filter
Esc         Clear the filter and go back to the list

FORM
----
Tab ↓       Next field
Shift+Tab ↑ Previous field
Enter       Add the movie, or save the edited one
Esc         Cancel: clear the form and leave edit mode
Ctrl+U      Clear the current field

All fields except the image are required. The image field takes a local
file path to upload, or keeps the existing image URL when editing.

GENERAL
-------
?, h        Toggle this help
G           Show logs
i           Change icon theme
q, Esc      Quit
Ctrl+C      Quit from anywhere

DIALOG SCROLLING
----------------
j/k ↑↓      Scroll up/down
PageUp/Down Page through content
Home/End    Jump to top/bottom
";

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar_state);
}

/// Full-screen scrollable text panel used by the help and logs dialogs
fn render_text_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if total_lines > visible_height {
        render_scrollbar(f, panel_area, scroll);
    }
}

/// Bordered message box with a one-line instruction footer
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = chunks[0].height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let message_paragraph = Paragraph::new(lines[offset.min(total_lines)..].join("\n"))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);

    if total_lines > visible_height {
        render_scrollbar(f, chunks[0], scroll);
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, movie_title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Confirm Delete ", icons.warning()), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(format!("Delete \"{}\"?", movie_title))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions =
        common::create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);

    f.render_widget(message, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, format!(" {} Info ", icons.info()), Color::Blue, message, scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, format!(" {} Error ", icons.error()), Color::Red, message, scroll);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_text_panel(f, area, DIALOG_TITLE_HELP, HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll) {
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_text_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}
