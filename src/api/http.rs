//! HTTP client for the movie catalogue backend
//!
//! Wraps a `reqwest::Client` and maps each [`MovieApi`] operation onto one
//! request against the configured collection URL.

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

use super::{ApiError, ImageSource, MovieApi, MoviePayload};
use crate::config::ApiConfig;
use crate::entities::movie::Movie;

/// reqwest-backed movie API client
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: Client,
    /// Collection URL without a trailing slash
    base_url: String,
}

impl HttpMovieApi {
    /// Create a client for the given collection URL
    ///
    /// # Arguments
    /// * `base_url` - Collection URL, e.g. `https://host/api/movies`
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(concat!("cinelist/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Create a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    /// URL of a single movie
    pub fn movie_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn build_form(payload: &MoviePayload) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in payload.text_fields() {
            form = form.text(name, value);
        }

        if let ImageSource::Upload(path) = &payload.image {
            form = form.part("image", Self::image_part(path).await?);
        }

        Ok(form)
    }

    async fn image_part(path: &Path) -> Result<Part, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Image {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        Ok(Part::bytes(bytes).file_name(file_name).mime_str(mime.essence_str())?)
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;
        Self::decode(response).await
    }

    async fn create_movie(&self, payload: &MoviePayload) -> Result<Movie, ApiError> {
        debug!("POST {}", self.base_url);
        let form = Self::build_form(payload).await?;
        let response = self.client.post(&self.base_url).multipart(form).send().await?;
        Self::decode(response).await
    }

    async fn update_movie(&self, id: &str, payload: &MoviePayload) -> Result<Movie, ApiError> {
        let url = self.movie_url(id);
        debug!("PUT {}", url);
        let form = Self::build_form(payload).await?;
        let response = self.client.put(&url).multipart(form).send().await?;
        Self::decode(response).await
    }

    async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        let url = self.movie_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Validate a collection URL and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(trimmed.to_string()),
        _ => Err(ApiError::InvalidBaseUrl(raw.to_string())),
    }
}
