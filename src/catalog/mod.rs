//! In-memory movie catalogue
//!
//! The client keeps an unvalidated copy of the server's records. It is
//! rebuilt wholesale by every fetch and patched only after a mutation
//! succeeds on the server; nothing is applied optimistically.

pub mod query;
pub mod service;

pub use query::{matches_query, visible_movies, SortKey};
pub use service::CatalogService;

use crate::entities::movie::Movie;

/// Ordered list of movies as last seen on the server
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch result
    pub fn replace_all(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    /// Add a created record.
    ///
    /// A record whose id is already present is replaced in place, so a
    /// created movie is never listed twice.
    pub fn insert(&mut self, movie: Movie) {
        match self.position(&movie.id) {
            Some(index) => self.movies[index] = movie,
            None => self.movies.push(movie),
        }
    }

    /// Splice an updated record over the one with `id`.
    ///
    /// Returns `false` when no record matched; the list is left unchanged.
    pub fn replace(&mut self, id: &str, movie: Movie) -> bool {
        match self.position(id) {
            Some(index) => {
                self.movies[index] = movie;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Movie> {
        self.position(id).map(|index| self.movies.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.id == id)
    }
}
