//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Movie metadata icons
#[derive(Debug, Clone)]
pub struct MovieIcons {
    pub movie: &'static str,
    pub rating_full: &'static str,
    pub rating_empty: &'static str,
    pub genre: &'static str,
    pub release_date: &'static str,
    pub image: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub search: &'static str,
    pub edit: &'static str,
    pub create: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub movie: MovieIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            movie: MovieIcons {
                movie: "🎬",
                rating_full: "⭐",
                rating_empty: "·",
                genre: "🎭",
                release_date: "📅",
                image: "🖼️",
            },
            ui: UiIcons {
                search: "🔍",
                edit: "✏️",
                create: "➕",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                loading: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            movie: MovieIcons {
                movie: "▶",
                rating_full: "★",
                rating_empty: "☆",
                genre: "◆",
                release_date: "◷",
                image: "▣",
            },
            ui: UiIcons {
                search: "⌕",
                edit: "✎",
                create: "+",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                loading: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            movie: MovieIcons {
                movie: ">",
                rating_full: "*",
                rating_empty: ".",
                genre: "#",
                release_date: "@",
                image: "[img]",
            },
            ui: UiIcons {
                search: "/",
                edit: "~",
                create: "+",
                error: "X",
                info: "i",
                warning: "!",
                loading: "...",
            },
        }
    }

    #[must_use]
    pub fn movie(&self) -> &'static str {
        self.icons().movie.movie
    }

    #[must_use]
    pub fn rating_icon(&self) -> &'static str {
        self.icons().movie.rating_full
    }

    #[must_use]
    pub fn genre(&self) -> &'static str {
        self.icons().movie.genre
    }

    #[must_use]
    pub fn release_date(&self) -> &'static str {
        self.icons().movie.release_date
    }

    #[must_use]
    pub fn image(&self) -> &'static str {
        self.icons().movie.image
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().ui.edit
    }

    #[must_use]
    pub fn create(&self) -> &'static str {
        self.icons().ui.create
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }

    /// Five-slot star gauge for a 0-10 rating; out-of-range values clamp
    #[must_use]
    pub fn rating_stars(&self, rating: f64) -> String {
        let icons = self.icons().movie;
        let filled = if rating.is_nan() {
            0
        } else {
            (rating.clamp(0.0, 10.0) / 2.0).round() as usize
        };
        let mut stars = icons.rating_full.repeat(filled);
        stars.push_str(&icons.rating_empty.repeat(5 - filled));
        stars
    }
}
