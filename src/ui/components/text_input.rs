//! Single-line text editing shared by the search bar and the form.
//!
//! The cursor is a character index; edits convert it to a byte offset so
//! multi-byte input stays intact.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Byte offset of the `cursor`-th character
fn byte_index(buffer: &str, cursor: usize) -> usize {
    buffer.chars().take(cursor).map(char::len_utf8).sum()
}

/// Apply an editing key to `buffer`.
///
/// Returns `true` when the buffer contents changed. Keys that are not
/// editing keys are ignored.
pub fn handle_edit_key(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let char_count = buffer.chars().count();
    *cursor = (*cursor).min(char_count);

    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let changed = !buffer.is_empty();
            buffer.clear();
            *cursor = 0;
            changed
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
        KeyCode::Char(c) => {
            buffer.insert(byte_index(buffer, *cursor), c);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let byte_pos = byte_index(buffer, *cursor - 1);
                buffer.remove(byte_pos);
                *cursor -= 1;
                true
            } else {
                false
            }
        }
        KeyCode::Delete => {
            if *cursor < char_count {
                let byte_pos = byte_index(buffer, *cursor);
                buffer.remove(byte_pos);
                true
            } else {
                false
            }
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            false
        }
        KeyCode::Right => {
            if *cursor < char_count {
                *cursor += 1;
            }
            false
        }
        KeyCode::Home => {
            *cursor = 0;
            false
        }
        KeyCode::End => {
            *cursor = char_count;
            false
        }
        _ => false,
    }
}

/// Display width of the text before the cursor, for placing the terminal cursor
pub fn cursor_column(buffer: &str, cursor: usize) -> u16 {
    u16::try_from(buffer.chars().take(cursor).count()).unwrap_or(u16::MAX)
}
