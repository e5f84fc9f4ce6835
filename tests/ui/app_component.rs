use crate::support::{movie, press, sample_movies, service, settle, started_app, type_text, FakeMovieApi};
use cinelist::catalog::SortKey;
use cinelist::config::Config;
use cinelist::constants::ERROR_REQUIRED_FIELDS;
use cinelist::form::MovieForm;
use cinelist::ui::app_component::{AppComponent, AppState};
use cinelist::ui::core::{Action, DialogType, EventType, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::Ordering;

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(state.catalog.is_empty());
    assert!(state.query.is_empty());
    assert_eq!(state.sort, SortKey::None);
    assert_eq!(state.focus, Focus::List);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_start_loads_catalogue() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let app = started_app(&api).await;

    assert_eq!(api.lists.load(Ordering::SeqCst), 1);
    assert_eq!(app.state().catalog.len(), 3);
    assert!(!app.state().loading);
    assert_eq!(app.selected_movie().map(|m| m.id.as_str()), Some("m1"));
}

#[tokio::test]
async fn test_startup_sort_from_config() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut config = Config::default();
    config.ui.default_sort = "title".to_string();

    let mut app = AppComponent::new(service(&api), &config);
    app.start();
    settle(&mut app).await;

    let titles: Vec<&str> = app.visible_movies().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Amelie", "Heat", "Inception"]);
}

#[tokio::test]
async fn test_failed_fetch_leaves_empty_list() {
    let api = FakeMovieApi::with_movies(sample_movies());
    api.set_failing(true);
    let app = started_app(&api).await;

    assert!(app.state().catalog.is_empty());
    assert!(!app.state().loading);
    // network failures are logged, not shown
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_reload_replaces_list() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    api.movies.lock().unwrap().push(movie("m4", "Alien", "Horror", 8.5));
    press(&mut app, KeyCode::Char('r')).await;
    settle(&mut app).await;

    assert_eq!(api.lists.load(Ordering::SeqCst), 2);
    assert_eq!(app.state().catalog.len(), 4);
}

#[tokio::test]
async fn test_invalid_submit_shows_error_without_request() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.state().focus, Focus::Form);
    type_text(&mut app, "Only a title").await;
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(api.calls(), 0);
    assert_eq!(app.dialog(), Some(&DialogType::Error(ERROR_REQUIRED_FIELDS.to_string())));
    assert_eq!(app.form().title, "Only a title");

    // any key dismisses the alert and keeps the form
    press(&mut app, KeyCode::Char('x')).await;
    assert!(app.dialog().is_none());
    assert_eq!(app.state().focus, Focus::Form);
}

#[tokio::test]
async fn test_create_movie_through_form() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    for (value, last) in [
        ("Alien", false),
        ("Horror", false),
        ("In space no one can hear you scream.", false),
        ("8.5", false),
        ("1979-05-25", true),
    ] {
        type_text(&mut app, value).await;
        if !last {
            press(&mut app, KeyCode::Tab).await;
        }
    }
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(api.creates.load(Ordering::SeqCst), 1);
    assert_eq!(app.state().catalog.len(), 4);
    let created = app.state().catalog.get("new0").unwrap();
    assert_eq!(created.title, "Alien");
    assert_eq!(created.genre, "Horror");
    assert_eq!(created.rating, 8.5);
    assert!(created.image_url.is_none());

    // form is reset and focus is back on the list
    assert_eq!(*app.form(), MovieForm::default());
    assert_eq!(app.state().focus, Focus::List);
}

#[tokio::test]
async fn test_edit_movie_replaces_record() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.state().focus, Focus::Form);
    assert_eq!(app.form().editing_id(), Some("m2"));
    assert_eq!(app.form().title, "Amelie");

    app.form_mut().title = "Amélie".to_string();
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(api.updates.load(Ordering::SeqCst), 1);
    assert_eq!(app.state().catalog.len(), 3);
    // same position in the list
    assert_eq!(app.state().catalog.movies()[1].title, "Amélie");
    assert!(!app.form().is_editing());
    assert_eq!(app.state().focus, Focus::List);
}

#[tokio::test]
async fn test_failed_update_keeps_list_and_form() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Enter).await;
    app.form_mut().genre = "Thriller".to_string();
    api.set_failing(true);
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(api.updates.load(Ordering::SeqCst), 1);
    assert_eq!(app.state().catalog.get("m1").unwrap().genre, "Sci-Fi");
    assert_eq!(app.form().editing_id(), Some("m1"));
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(
        app.dialog(),
        Some(&DialogType::DeleteConfirmation {
            movie_id: "m1".to_string(),
            title: "Inception".to_string(),
        })
    );

    // declining sends nothing
    press(&mut app, KeyCode::Char('n')).await;
    settle(&mut app).await;
    assert!(app.dialog().is_none());
    assert_eq!(api.deletes.load(Ordering::SeqCst), 0);

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;
    settle(&mut app).await;

    assert_eq!(api.deletes.load(Ordering::SeqCst), 1);
    assert!(app.state().catalog.get("m1").is_none());
    assert_eq!(app.state().catalog.len(), 2);
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_movie() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;
    api.set_failing(true);

    press(&mut app, KeyCode::Delete).await;
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(api.deletes.load(Ordering::SeqCst), 1);
    assert_eq!(app.state().catalog.len(), 3);
}

#[tokio::test]
async fn test_deleting_edited_movie_clears_form() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.form().editing_id(), Some("m1"));

    app.dispatch(Action::DeleteMovie("m1".to_string())).await;
    settle(&mut app).await;

    assert!(!app.form().is_editing());
    assert_eq!(app.state().focus, Focus::List);
}

#[tokio::test]
async fn test_edit_unknown_movie_shows_error() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    app.dispatch(Action::EditMovie("gone".to_string())).await;
    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    assert!(!app.form().is_editing());
}

#[tokio::test]
async fn test_search_filters_and_clears() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('/')).await;
    assert_eq!(app.state().focus, Focus::Search);
    type_text(&mut app, "CRI").await;

    assert_eq!(app.state().query, "CRI");
    let ids: Vec<&str> = app.visible_movies().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m3"]);
    // the search only narrows the view
    assert_eq!(app.state().catalog.len(), 3);

    press(&mut app, KeyCode::Esc).await;
    assert!(app.state().query.is_empty());
    assert_eq!(app.state().focus, Focus::List);
    assert_eq!(app.visible_movies().len(), 3);
}

#[tokio::test]
async fn test_sort_cycles_from_list() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('s')).await;
    assert_eq!(app.state().sort, SortKey::Title);
    press(&mut app, KeyCode::Char('s')).await;
    press(&mut app, KeyCode::Char('s')).await;
    assert_eq!(app.state().sort, SortKey::Rating);

    let ids: Vec<&str> = app.visible_movies().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
}

#[tokio::test]
async fn test_cancel_form_returns_to_list() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "Draft").await;
    press(&mut app, KeyCode::Esc).await;

    assert_eq!(app.state().focus, Focus::List);
    assert!(app.form().title.is_empty());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_help_dialog_and_quit() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('?')).await;
    assert_eq!(app.dialog(), Some(&DialogType::Help));
    // keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('s')).await;
    assert_eq!(app.state().sort, SortKey::None);
    press(&mut app, KeyCode::Esc).await;
    assert!(app.dialog().is_none());

    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_from_form() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    press(&mut app, KeyCode::Char('a')).await;
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    app.handle_event(EventType::Key(ctrl_c)).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_shows_list_and_details() {
    use cinelist::ui::core::Component;
    use ratatui::{backend::TestBackend, Terminal};

    let api = FakeMovieApi::with_movies(sample_movies());
    let mut app = started_app(&api).await;

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Inception"));
    assert!(screen.contains("Amelie"));
    assert!(screen.contains("About Inception"));
}
