//! Search and sort over the in-memory catalogue
//!
//! Both are recomputed from scratch whenever the view refreshes: a linear
//! scan for the search term followed by a stable sort, so ties keep the
//! order the server returned.

use std::cmp::Ordering;
use std::fmt;

use crate::entities::movie::Movie;

/// Ordering applied to the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Server order
    #[default]
    None,
    /// Title, ascending
    Title,
    /// Genre, ascending
    Genre,
    /// Rating, highest first
    Rating,
}

impl SortKey {
    /// Parse a configuration value; the empty string means server order
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "none" => Some(Self::None),
            "title" => Some(Self::Title),
            "genre" => Some(Self::Genre),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    /// Next key in the cycle none -> title -> genre -> rating -> none
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Title,
            Self::Title => Self::Genre,
            Self::Genre => Self::Rating,
            Self::Rating => Self::None,
        }
    }

    /// Compare two movies under this key
    pub fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Title => compare_text(&a.title, &b.title),
            Self::Genre => compare_text(&a.genre, &b.genre),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "Sort By",
            Self::Title => "Title",
            Self::Genre => "Genre",
            Self::Rating => "Rating",
        };
        f.write_str(label)
    }
}

/// Lexicographic order that ignores case first, then uses it to break ties
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Case-insensitive substring match on title or genre.
///
/// An empty query matches every movie.
pub fn matches_query(movie: &Movie, query: &str) -> bool {
    let needle = query.to_lowercase();
    movie.title.to_lowercase().contains(&needle) || movie.genre.to_lowercase().contains(&needle)
}

/// Movies matching `query`, ordered by `sort`
pub fn visible_movies<'a>(movies: &'a [Movie], query: &str, sort: SortKey) -> Vec<&'a Movie> {
    let mut visible: Vec<&Movie> = movies.iter().filter(|movie| matches_query(movie, query)).collect();

    if sort != SortKey::None {
        visible.sort_by(|a, b| sort.compare(a, b));
    }

    visible
}
