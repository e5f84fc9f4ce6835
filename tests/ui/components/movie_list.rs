use crate::support::sample_movies;
use cinelist::ui::components::MovieListComponent;
use cinelist::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_list() -> MovieListComponent {
    let mut list = MovieListComponent::new();
    list.update_data(sample_movies(), "empty");
    list
}

#[test]
fn test_navigation_wraps() {
    let mut list = loaded_list();
    assert_eq!(list.handle_key_events(key(KeyCode::Char('j'))), Action::NextMovie);

    list.update(Action::PreviousMovie);
    assert_eq!(list.selected_movie().unwrap().id, "m3");
    list.update(Action::NextMovie);
    assert_eq!(list.selected_movie().unwrap().id, "m1");
}

#[test]
fn test_edit_and_delete_keys() {
    let mut list = loaded_list();
    list.update(Action::NextMovie);

    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('e'))),
        Action::EditMovie("m2".to_string())
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::ShowDialog(DialogType::DeleteConfirmation {
            movie_id: "m2".to_string(),
            title: "Amelie".to_string(),
        })
    );
}

#[test]
fn test_empty_list_has_no_targets() {
    let mut list = MovieListComponent::new();
    list.update_data(Vec::new(), "nothing here");

    assert!(list.selected_movie().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert_eq!(list.update(Action::NextMovie), Action::None);
}

#[test]
fn test_selection_follows_record_across_refresh() {
    let mut list = loaded_list();
    list.update(Action::SelectMovie(2));
    assert_eq!(list.selected_movie().unwrap().id, "m3");

    let mut reordered = sample_movies();
    reordered.reverse();
    list.update_data(reordered, "empty");
    assert_eq!(list.selected_index, 0);
    assert_eq!(list.selected_movie().unwrap().id, "m3");
}

#[test]
fn test_selection_clamped_when_list_shrinks() {
    let mut list = loaded_list();
    list.update(Action::SelectMovie(2));

    let mut shorter = sample_movies();
    shorter.truncate(1);
    list.update_data(shorter, "empty");
    assert_eq!(list.selected_movie().unwrap().id, "m1");
}

#[test]
fn test_select_movie_focuses_list() {
    let mut list = loaded_list();
    assert_eq!(list.update(Action::SelectMovie(1)), Action::FocusList);
    // out of range leaves the selection alone
    list.update(Action::SelectMovie(10));
    assert_eq!(list.selected_index, 1);
}
