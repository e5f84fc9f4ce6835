//! Movie form state
//!
//! [`MovieForm`] holds the create/edit form exactly as typed. It only
//! checks that required fields are filled in; the backend owns every other
//! rule (rating range, date format).

use std::fmt;
use std::path::PathBuf;

use crate::api::{ImageSource, MoviePayload};
use crate::constants::ERROR_REQUIRED_FIELDS;
use crate::entities::movie::Movie;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Genre,
    Description,
    Rating,
    ReleaseDate,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Genre,
        FormField::Description,
        FormField::Rating,
        FormField::ReleaseDate,
        FormField::Image,
    ];

    /// Field after this one, wrapping around
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Field before this one, wrapping around
    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Genre => "Genre",
            FormField::Description => "Description",
            FormField::Rating => "Rating",
            FormField::ReleaseDate => "Release Date",
            FormField::Image => "Image",
        }
    }

    /// Input hint shown in an empty field
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Rating => "0-10",
            FormField::ReleaseDate => "YYYY-MM-DD",
            FormField::Image => "optional: file path or image URL",
            _ => "",
        }
    }

    /// Everything but the image is required
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Image)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{}", ERROR_REQUIRED_FIELDS)]
    MissingFields(Vec<FormField>),
}

/// Create/edit form contents.
///
/// `editing` carries the id of the record being edited; `None` means the
/// form creates a new record on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub rating: String,
    pub release_date: String,
    /// Local file path or image URL
    pub image: String,
    editing: Option<String>,
    existing_image: Option<String>,
}

impl MovieForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Genre => &self.genre,
            FormField::Description => &self.description,
            FormField::Rating => &self.rating,
            FormField::ReleaseDate => &self.release_date,
            FormField::Image => &self.image,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Genre => &mut self.genre,
            FormField::Description => &mut self.description,
            FormField::Rating => &mut self.rating,
            FormField::ReleaseDate => &mut self.release_date,
            FormField::Image => &mut self.image,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Id of the record being edited
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Enter edit mode pre-filled from `movie`
    pub fn load(&mut self, movie: &Movie) {
        self.title = movie.title.clone();
        self.description = movie.description.clone();
        self.genre = movie.genre.clone();
        self.rating = movie.rating_text();
        self.release_date = movie.release_date_text();
        self.image = movie.image_url.clone().unwrap_or_default();
        self.existing_image = movie.image_url.clone();
        self.editing = Some(movie.id.clone());
    }

    /// Reset every field and leave edit mode
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Required fields that are blank, in focus order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect()
    }

    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// How the image field will be sent.
    ///
    /// An unchanged image on an edited record, or anything that looks like
    /// an http(s) URL, is sent back as text. Any other non-empty value is a
    /// local file to upload.
    pub fn image_source(&self) -> ImageSource {
        let image = self.image.trim();
        if image.is_empty() {
            return ImageSource::None;
        }

        let unchanged = self.existing_image.as_deref() == Some(image);
        if unchanged || image.starts_with("http://") || image.starts_with("https://") {
            ImageSource::Existing(image.to_string())
        } else {
            ImageSource::Upload(PathBuf::from(image))
        }
    }

    /// Validated multipart payload for create or update
    pub fn to_payload(&self) -> Result<MoviePayload, FormError> {
        self.validate()?;
        Ok(MoviePayload {
            title: self.title.clone(),
            description: self.description.clone(),
            genre: self.genre.clone(),
            rating: self.rating.trim().to_string(),
            release_date: self.release_date.trim().to_string(),
            image: self.image_source(),
        })
    }
}
