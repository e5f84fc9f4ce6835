//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod form_component;
pub mod movie_detail;
pub mod movie_list_component;
pub mod search_bar_component;
pub mod status_bar;
pub mod text_input;

// Component exports
pub use dialog_component::DialogComponent;
pub use form_component::FormComponent;
pub use movie_list_component::MovieListComponent;
pub use search_bar_component::SearchBarComponent;
pub use status_bar::StatusInfo;
