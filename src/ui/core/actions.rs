use std::fmt;

use crate::api::MoviePayload;
use crate::entities::movie::Movie;

/// Which pane receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
    Form,
}

/// Backend call a background request performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Fetch => "fetch movies",
            Operation::Create => "create movie",
            Operation::Update => "save movie",
            Operation::Delete => "delete movie",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextMovie,
    PreviousMovie,
    SelectMovie(usize),
    FocusList,
    FocusSearch,
    FocusForm,

    // Derived view
    SearchChanged(String),
    ClearSearch,
    CycleSort,

    // Form
    NewMovie,
    EditMovie(String),
    SubmitForm,
    CancelForm,

    // Backend requests
    FetchMovies,
    CreateMovie(MoviePayload),
    UpdateMovie {
        id: String,
        payload: MoviePayload,
    },
    DeleteMovie(String),

    // Background results
    MoviesLoaded(Vec<Movie>),
    MovieCreated(Movie),
    MovieUpdated {
        id: String,
        movie: Movie,
    },
    MovieDeleted(String),
    RequestFailed {
        operation: Operation,
        error: String,
    },

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation { movie_id: String, title: String },
    Error(String),
    Info(String),
    Help,
    Logs,
}
