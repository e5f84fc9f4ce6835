//! Movie API abstraction
//!
//! The catalogue lives on a remote REST backend that this application
//! consumes as-is. This module defines the operations the rest of the
//! application relies on and the multipart payload shared by create and
//! update:
//!
//! - `GET    {base}`      list every movie
//! - `POST   {base}`      create a movie from a multipart form
//! - `PUT    {base}/{id}` replace a movie from the same form
//! - `DELETE {base}/{id}` remove a movie
//!
//! [`MovieApi`] is the seam between the UI and the network; [`HttpMovieApi`]
//! is the production implementation.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::entities::movie::Movie;

/// reqwest implementation of [`MovieApi`]
pub mod http;

pub use http::HttpMovieApi;

/// Where the `image` form field comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSource {
    /// No image; the field is left out of the form
    #[default]
    None,
    /// Keep an already-uploaded image; its URL is sent back as text
    Existing(String),
    /// Upload a local file
    Upload(PathBuf),
}

/// The multipart field set sent on create and update.
///
/// Rating and release date are carried exactly as typed; the backend owns
/// their interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviePayload {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub rating: String,
    pub release_date: String,
    pub image: ImageSource,
}

impl MoviePayload {
    /// Text parts of the form in wire order, with their wire names.
    ///
    /// An existing image URL is included as text; an upload is attached
    /// separately as a file part.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
        ];
        if let ImageSource::Existing(url) = &self.image {
            fields.push(("image", url.clone()));
        }
        fields.push(("genre", self.genre.clone()));
        fields.push(("rating", self.rating.clone()));
        fields.push(("releaseDate", self.release_date.clone()));
        fields
    }
}

/// Operations offered by the movie catalogue backend
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Collection URL the client talks to
    fn endpoint(&self) -> &str;

    /// Retrieve all movies
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError>;

    /// Create a movie and return the stored record
    async fn create_movie(&self, payload: &MoviePayload) -> Result<Movie, ApiError>;

    /// Replace a movie and return the stored record
    async fn update_movie(&self, id: &str, payload: &MoviePayload) -> Result<Movie, ApiError>;

    /// Delete a movie
    async fn delete_movie(&self, id: &str) -> Result<(), ApiError>;
}

/// Errors raised while talking to the movie API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
