//! Character API response types and search parameters.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::ApiError;

// --- Character ---

/// A single character record as returned by the API.
///
/// Every field is optional; the API omits or nulls fields freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Opaque identifier used for detail lookups.
    #[serde(rename = "_id")]
    pub id: Option<u64>,
    /// Display name.
    pub name: Option<String>,
    /// Portrait image URL.
    pub image_url: Option<String>,
    /// Feature film titles.
    pub films: Option<Vec<String>>,
    /// Short film titles.
    pub short_films: Option<Vec<String>>,
    /// TV show titles.
    pub tv_shows: Option<Vec<String>>,
    /// Video game titles.
    pub video_games: Option<Vec<String>>,
    /// Wiki page the record was scraped from.
    pub source_url: Option<String>,
    /// Canonical API URL of this record.
    pub url: Option<String>,
}

// --- Search criterion ---

/// Field a character search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCriterion {
    /// Character name.
    Name,
    /// Feature film title.
    Film,
    /// TV show title.
    TvShow,
}

impl SearchCriterion {
    /// All criteria, in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Film, Self::TvShow];

    /// Returns the string form accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Film => "film",
            Self::TvShow => "tvShow",
        }
    }

    /// Returns the query parameter name used by the `character` endpoint.
    #[must_use]
    pub const fn query_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Film => "films",
            Self::TvShow => "tvShows",
        }
    }

    /// Returns the next criterion, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Film,
            Self::Film => Self::TvShow,
            Self::TvShow => Self::Name,
        }
    }

    /// Returns the previous criterion, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::TvShow,
            Self::Film => Self::Name,
            Self::TvShow => Self::Film,
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCriterion {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "film" => Ok(Self::Film),
            "tvShow" => Ok(Self::TvShow),
            other => Err(ApiError::InvalidCriterion(String::from(other))),
        }
    }
}

// --- Films and TV shows ---

/// Distinct film and TV show titles, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmsAndTvShows {
    /// Unique film titles.
    pub films: Vec<String>,
    /// Unique TV show titles.
    pub tv_shows: Vec<String>,
}

// --- Character details ---

/// Decoded body of `character/{id}`, kept exactly as received.
///
/// Unlike search results this body is not unwrapped from its `data`
/// envelope nor normalized to a list. Whether the two endpoints were meant to
/// be shaped the same way is unclear, so the raw body is preserved and
/// [`CharacterDetails::characters`] offers the search-style view on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetails(serde_json::Value);

impl CharacterDetails {
    /// Wraps a decoded body.
    #[must_use]
    pub const fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    /// Returns the raw decoded body.
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the wrapper and returns the raw decoded body.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Interprets the body like a search response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedResponse`] if the body has no `data`
    /// field or its contents are not character records.
    pub fn characters(&self) -> Result<Vec<Character>, ApiError> {
        let raw_result = Envelope::deserialize(&self.0);
        let envelope = raw_result.map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        envelope.into_characters()
    }
}

// --- Envelope ---

/// Outer response object wrapping the payload under `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    /// Payload; absent and `null` are both treated as missing.
    data: Option<OneOrMany<Character>>,
}

impl Envelope {
    /// Unwraps the payload, turning a bare object into a one-element list.
    pub(crate) fn into_characters(self) -> Result<Vec<Character>, ApiError> {
        self.data.map(OneOrMany::into_vec).ok_or_else(|| {
            ApiError::MalformedResponse(String::from("response has no `data` field"))
        })
    }
}

/// A JSON value that is either a list or a single item.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}
