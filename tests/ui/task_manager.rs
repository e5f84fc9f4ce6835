use crate::support::{sample_movies, service, FakeMovieApi};
use cinelist::api::{ImageSource, MoviePayload};
use cinelist::ui::core::{Action, Operation, TaskManager};
use std::time::Duration;

fn payload(title: &str) -> MoviePayload {
    MoviePayload {
        title: title.to_string(),
        description: "desc".to_string(),
        genre: "Drama".to_string(),
        rating: "7".to_string(),
        release_date: "2020-02-02".to_string(),
        image: ImageSource::None,
    }
}

async fn next_action(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>) -> Action {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("request did not report back")
        .expect("channel closed")
}

#[tokio::test]
async fn test_fetch_reports_movies() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_fetch(service(&api));
    assert!(manager.is_running(Operation::Fetch));
    assert!(!manager.is_running(Operation::Delete));

    match next_action(&mut rx).await {
        Action::MoviesLoaded(movies) => assert_eq!(movies.len(), 3),
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_update_reports_id_and_record() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_update(service(&api), "m2".to_string(), payload("Amélie"));
    match next_action(&mut rx).await {
        Action::MovieUpdated { id, movie } => {
            assert_eq!(id, "m2");
            assert_eq!(movie.title, "Amélie");
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_failure_reports_operation() {
    let api = FakeMovieApi::with_movies(sample_movies());
    api.set_failing(true);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_create(service(&api), payload("Heat"));
    match next_action(&mut rx).await {
        Action::RequestFailed { operation, error } => {
            assert_eq!(operation, Operation::Create);
            assert!(error.contains("Failed to create movie"));
            assert!(error.contains("500"));
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_and_cleanup() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let (mut manager, mut rx) = TaskManager::new();

    let id = manager.spawn_delete(service(&api), "m1".to_string());
    assert_eq!(manager.task_count(), 1);
    assert_eq!(next_action(&mut rx).await, Action::MovieDeleted("m1".to_string()));

    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(finished, vec![id]);
    assert_eq!(api.movies.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let api = FakeMovieApi::with_movies(sample_movies());
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_fetch(service(&api));
    manager.spawn_fetch(service(&api));
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_running(Operation::Fetch));
}
