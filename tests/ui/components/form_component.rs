use crate::support::movie;
use cinelist::api::ImageSource;
use cinelist::form::FormField;
use cinelist::ui::components::FormComponent;
use cinelist::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_into(form: &mut FormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(key(KeyCode::Char(c)));
    }
}

fn focused_form() -> FormComponent {
    let mut form = FormComponent::new();
    form.focused = true;
    form
}

#[test]
fn test_unfocused_form_ignores_keys() {
    let mut form = FormComponent::new();
    assert_eq!(form.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert!(form.form.title.is_empty());
}

#[test]
fn test_typing_fills_focused_field() {
    let mut form = focused_form();
    type_into(&mut form, "Heat");
    form.handle_key_events(key(KeyCode::Tab));
    type_into(&mut form, "Crime");
    form.handle_key_events(key(KeyCode::BackTab));
    form.handle_key_events(key(KeyCode::Backspace));

    assert_eq!(form.form.title, "Hea");
    assert_eq!(form.form.genre, "Crime");
    assert_eq!(form.focused_field, FormField::Title);
}

#[test]
fn test_enter_and_esc() {
    let mut form = focused_form();
    assert_eq!(form.handle_key_events(key(KeyCode::Enter)), Action::SubmitForm);
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::CancelForm);
}

#[test]
fn test_submit_incomplete_form() {
    let mut form = focused_form();
    type_into(&mut form, "Heat");

    match form.update(Action::SubmitForm) {
        Action::ShowDialog(DialogType::Error(message)) => {
            assert_eq!(message, "All fields except the image are required!")
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_submit_new_movie() {
    let mut form = focused_form();
    form.form.title = "Heat".to_string();
    form.form.genre = "Crime".to_string();
    form.form.description = "Cops and robbers.".to_string();
    form.form.rating = "8.3".to_string();
    form.form.release_date = "1995-12-15".to_string();

    match form.update(Action::SubmitForm) {
        Action::CreateMovie(payload) => {
            assert_eq!(payload.title, "Heat");
            assert_eq!(payload.image, ImageSource::None);
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_submit_edited_movie() {
    let mut form = focused_form();
    let mut stored = movie("m9", "Heat", "Crime", 8.3);
    stored.image_url = Some("https://img.example/heat.jpg".to_string());
    form.load(&stored);

    match form.update(Action::SubmitForm) {
        Action::UpdateMovie { id, payload } => {
            assert_eq!(id, "m9");
            assert_eq!(payload.rating, "8.3");
            assert_eq!(payload.release_date, "2001-01-01");
            assert_eq!(payload.image, ImageSource::Existing("https://img.example/heat.jpg".to_string()));
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_new_movie_clears_edit_mode() {
    let mut form = focused_form();
    form.load(&movie("m9", "Heat", "Crime", 8.3));
    assert!(form.form.is_editing());

    assert_eq!(form.update(Action::NewMovie), Action::NewMovie);
    assert!(!form.form.is_editing());
    assert!(form.form.title.is_empty());
}
