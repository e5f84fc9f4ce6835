use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::datetime;

/// A movie record as stored by the catalogue backend.
///
/// The identifier is assigned by the server. Every other field is whatever
/// the backend echoes back; nothing here is validated beyond parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub genre: String,
    /// Expected to be 0-10; out-of-range values are kept as-is.
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: f64,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
}

impl Movie {
    /// Rating as typed into the form (`7`, `8.5`)
    pub fn rating_text(&self) -> String {
        self.rating.to_string()
    }

    /// Release date as typed into the form, empty when unknown
    pub fn release_date_text(&self) -> String {
        self.release_date.map(datetime::format_ymd).unwrap_or_default()
    }

    /// Year of release for compact list rows
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// The form posts the rating as text, so some records come back with a
/// string rating. Unparseable or null ratings read as zero.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(datetime::parse_release_date))
}
