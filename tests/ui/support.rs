//! Shared fixtures for the UI tests

use async_trait::async_trait;
use cinelist::api::{ApiError, ImageSource, MovieApi, MoviePayload};
use cinelist::catalog::CatalogService;
use cinelist::config::Config;
use cinelist::ui::core::EventType;
use cinelist::ui::AppComponent;
use cinelist::utils::datetime;
use cinelist::Movie;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn movie(id: &str, title: &str, genre: &str, rating: f64) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {}", title),
        image_url: None,
        genre: genre.to_string(),
        rating,
        release_date: datetime::parse_release_date("2001-01-01"),
    }
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie("m1", "Inception", "Sci-Fi", 8.8),
        movie("m2", "Amelie", "Romance", 8.3),
        movie("m3", "Heat", "Crime", 8.3),
    ]
}

/// In-memory stand-in for the catalogue backend
#[derive(Default)]
pub struct FakeMovieApi {
    pub movies: Mutex<Vec<Movie>>,
    pub fail: AtomicBool,
    pub lists: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
    next_id: AtomicUsize,
}

impl FakeMovieApi {
    pub fn with_movies(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            movies: Mutex::new(movies),
            ..Default::default()
        })
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst) + self.deletes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn build(id: String, payload: &MoviePayload) -> Movie {
        let image_url = match &payload.image {
            ImageSource::None => None,
            ImageSource::Existing(url) => Some(url.clone()),
            ImageSource::Upload(path) => Some(format!(
                "https://img.example/{}",
                path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
            )),
        };
        Movie {
            id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            image_url,
            genre: payload.genre.clone(),
            rating: payload.rating.parse().unwrap_or(0.0),
            release_date: datetime::parse_release_date(&payload.release_date),
        }
    }
}

#[async_trait]
impl MovieApi for FakeMovieApi {
    fn endpoint(&self) -> &str {
        "http://fake.test/api/movies"
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn create_movie(&self, payload: &MoviePayload) -> Result<Movie, ApiError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let id = format!("new{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let movie = Self::build(id, payload);
        self.movies.lock().unwrap().push(movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: &str, payload: &MoviePayload) -> Result<Movie, ApiError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let movie = Self::build(id.to_string(), payload);
        let mut movies = self.movies.lock().unwrap();
        match movies.iter_mut().find(|m| m.id == id) {
            Some(stored) => *stored = movie.clone(),
            None => {
                return Err(ApiError::Status {
                    status: 404,
                    body: "not found".to_string(),
                })
            }
        }
        Ok(movie)
    }

    async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.movies.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

pub fn service(api: &Arc<FakeMovieApi>) -> CatalogService {
    CatalogService::new(api.clone())
}

/// App started against `api` with the initial fetch applied
pub async fn started_app(api: &Arc<FakeMovieApi>) -> AppComponent {
    let mut app = AppComponent::new(service(api), &Config::default());
    app.start();
    settle(&mut app).await;
    app
}

/// Wait for every background request and apply its result
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.apply_background_actions().await;
        if app.active_task_count() == 0 {
            break;
        }
    }
    // results sent just before the last cleanup
    app.apply_background_actions().await;
}

pub fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code)).await.unwrap();
}

pub async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}
