//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// API
/// Catalogue endpoint used when no configuration overrides it
pub const DEFAULT_API_URL: &str = "https://movie-catalogue-backend.vercel.app/api/movies";
/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "CINELIST_API_URL";
/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Upper bound accepted for `api.request_timeout_secs`
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// UI Titles
pub const TITLE_APP: &str = "Movie Catalog";
pub const TITLE_MOVIES: &str = "Movies";
pub const TITLE_DETAILS: &str = "Details";
pub const TITLE_FORM_CREATE: &str = "Add Movie";
pub const TITLE_FORM_EDIT: &str = "Edit Movie";
pub const TITLE_SEARCH: &str = "Search by title or genre";

// Empty states
pub const EMPTY_NO_MATCH: &str = "No movies match your search.";
pub const EMPTY_NO_SELECTION: &str = "No movie selected.";
pub const EMPTY_CATALOG: &str = "No movies yet. Press 'a' to add one or 'r' to reload.";
pub const ERROR_MOVIE_GONE: &str = "That movie is no longer in the list.";

// Validation Error Messages
pub const ERROR_REQUIRED_FIELDS: &str = "All fields except the image are required!";

// Log Messages
pub const LOG_ERROR_FETCH: &str = "Error fetching movies";
pub const LOG_ERROR_CREATE: &str = "Error creating movie";
pub const LOG_ERROR_SAVE: &str = "Error saving movie";
pub const LOG_ERROR_DELETE: &str = "Error deleting movie";

// Status bar
pub const STATUS_LOADING: &str = "⟳ Loading movies...";
pub const STATUS_SHORTCUTS: &str = "a: add • e: edit • d: delete • /: search • s: sort • r: refresh • ?: help • q: quit";

// Dialog titles
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "📖 Help - Press 'Esc', '?' or 'h' to close";

// Logging
/// Maximum number of entries kept in the in-memory log buffer
pub const MAX_LOG_ENTRIES: usize = 1000;
/// File name of the on-disk log inside the data directory
pub const LOG_FILE_NAME: &str = "cinelist.log";

// UI Layout Constants
/// Minimum form/detail column width
pub const FORM_MIN_WIDTH: u16 = 30;
/// Maximum form/detail column width
pub const FORM_MAX_WIDTH: u16 = 80;
/// Default form/detail column width
pub const FORM_DEFAULT_WIDTH: u16 = 48;
/// Minimum list width to preserve usability
pub const LIST_MIN_WIDTH: u16 = 20;
/// Height of the search bar including borders
pub const SEARCH_BAR_HEIGHT: u16 = 3;
