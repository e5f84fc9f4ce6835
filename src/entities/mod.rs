//! Data models exchanged with the movie API

pub mod movie;
