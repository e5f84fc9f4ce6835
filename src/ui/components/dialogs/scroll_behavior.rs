use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Scroll position of a dialog's text body.
///
/// The offset may run past the end while keys are pressed; it is clamped
/// against the real content length at render time.
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a navigation key; returns whether the key was a scroll key
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.offset = self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset = self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset = self.offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.offset = self.offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = usize::MAX,
            _ => return false,
        }
        self.scrollbar_state = self.scrollbar_state.position(self.offset);
        true
    }

    /// Clamp the offset to the content and sync the scrollbar.
    ///
    /// Returns the first line to display.
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }
}
