use cinelist::ui::components::SearchBarComponent;
use cinelist::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_typing_reports_query() {
    let mut search = SearchBarComponent::new();
    search.focused = true;

    assert_eq!(
        search.handle_key_events(key(KeyCode::Char('s'))),
        Action::SearchChanged("s".to_string())
    );
    assert_eq!(
        search.handle_key_events(key(KeyCode::Char('f'))),
        Action::SearchChanged("sf".to_string())
    );
    assert_eq!(
        search.handle_key_events(key(KeyCode::Backspace)),
        Action::SearchChanged("s".to_string())
    );
    // cursor keys do not change the query
    assert_eq!(search.handle_key_events(key(KeyCode::Left)), Action::None);
}

#[test]
fn test_leaving_the_search_box() {
    let mut search = SearchBarComponent::new();
    search.focused = true;

    assert_eq!(search.handle_key_events(key(KeyCode::Enter)), Action::FocusList);
    assert_eq!(search.handle_key_events(key(KeyCode::Esc)), Action::ClearSearch);
}

#[test]
fn test_clear_search_empties_buffer() {
    let mut search = SearchBarComponent::new();
    search.query = "drama".to_string();

    assert_eq!(search.update(Action::ClearSearch), Action::ClearSearch);
    assert!(search.query.is_empty());
}

#[test]
fn test_unfocused_search_ignores_keys() {
    let mut search = SearchBarComponent::new();
    assert_eq!(search.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert!(search.query.is_empty());
}
