//! Terminal user interface
//!
//! A single screen: search bar on top, the movie list on the left, details
//! and the create/edit form on the right, and a status line at the bottom.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
