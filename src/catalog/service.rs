//! Catalogue service
//!
//! [`CatalogService`] is the data layer the UI talks to. It wraps a
//! [`MovieApi`] implementation and turns its typed errors into `anyhow`
//! errors with context, logging each outcome on the way.

use anyhow::{Context, Result};
use log::{error, info};
use std::sync::Arc;

use crate::api::{HttpMovieApi, MovieApi, MoviePayload};
use crate::config::ApiConfig;
use crate::constants::{LOG_ERROR_CREATE, LOG_ERROR_DELETE, LOG_ERROR_FETCH, LOG_ERROR_SAVE};
use crate::entities::movie::Movie;

/// Cloneable handle onto the movie backend.
///
/// Clones share the same API client, so one can be moved into each
/// background request.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn MovieApi>,
}

impl CatalogService {
    /// Wrap an existing API implementation
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self { api }
    }

    /// Build a service talking HTTP to the configured backend
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let api = HttpMovieApi::from_config(config).context("Failed to create movie API client")?;
        Ok(Self::new(Arc::new(api)))
    }

    /// Collection URL of the backend
    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    /// Retrieve every movie from the backend.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    pub async fn fetch_all(&self) -> Result<Vec<Movie>> {
        match self.api.list_movies().await {
            Ok(movies) => {
                info!("Fetched {} movies from {}", movies.len(), self.endpoint());
                Ok(movies)
            }
            Err(e) => {
                error!("{}: {}", LOG_ERROR_FETCH, e);
                Err(e).context("Failed to fetch movies")
            }
        }
    }

    /// Create a movie and return the record the server stored
    ///
    /// # Errors
    /// Returns an error if the image cannot be read or the request fails
    pub async fn create(&self, payload: &MoviePayload) -> Result<Movie> {
        match self.api.create_movie(payload).await {
            Ok(movie) => {
                info!("Created movie '{}' ({})", movie.title, movie.id);
                Ok(movie)
            }
            Err(e) => {
                error!("{}: {}", LOG_ERROR_CREATE, e);
                Err(e).context("Failed to create movie")
            }
        }
    }

    /// Replace the movie with `id` and return the updated record
    ///
    /// # Errors
    /// Returns an error if the image cannot be read or the request fails
    pub async fn update(&self, id: &str, payload: &MoviePayload) -> Result<Movie> {
        match self.api.update_movie(id, payload).await {
            Ok(movie) => {
                info!("Updated movie '{}' ({})", movie.title, movie.id);
                Ok(movie)
            }
            Err(e) => {
                error!("{}: {}", LOG_ERROR_SAVE, e);
                Err(e).with_context(|| format!("Failed to save movie {}", id))
            }
        }
    }

    /// Delete the movie with `id`
    ///
    /// # Errors
    /// Returns an error if the request fails
    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.api.delete_movie(id).await {
            Ok(()) => {
                info!("Deleted movie {}", id);
                Ok(())
            }
            Err(e) => {
                error!("{}: {}", LOG_ERROR_DELETE, e);
                Err(e).with_context(|| format!("Failed to delete movie {}", id))
            }
        }
    }
}
