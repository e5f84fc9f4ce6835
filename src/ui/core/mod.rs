//! Core UI functionality for Cinelist.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Keyboard, mouse and resize event polling
//! - [`task_manager`] - Background requests against the movie backend
//!
//! Components turn input into [`Action`]s, the app component applies them,
//! and the [`TaskManager`] sends the results of backend calls back into the
//! same action stream.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus, Operation};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
