//! Utility modules for the Cinelist application.
//!
//! - [`datetime`] - Release date parsing and formatting

pub mod datetime;
