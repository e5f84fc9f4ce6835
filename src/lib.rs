//! Cinelist - A Terminal User Interface (TUI) for a remote movie catalogue
//!
//! This library provides a terminal-based interface for browsing and
//! managing movie records held by a REST backend. It includes the HTTP
//! client for that backend, the in-memory catalogue with search and sort,
//! the record form, and an interactive UI built with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - Remote movie API trait and its HTTP implementation
//! * [`catalog`] - In-memory list state, search/sort and the request service
//! * [`config`] - Application configuration management
//! * [`form`] - Create/edit form state and validation
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Remote movie API abstraction and HTTP client
pub mod api;

/// In-memory catalogue, query helpers and request service
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Data models exchanged with the movie API
pub mod entities;

/// Form state for creating and editing movies
pub mod form;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and other helpers
pub mod utils;

pub use entities::movie::Movie;
