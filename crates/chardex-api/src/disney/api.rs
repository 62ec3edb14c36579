//! `CharacterApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::ApiError;
use super::types::{Character, CharacterDetails, FilmsAndTvShows, SearchCriterion};

/// Disney character database API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every operation sends at most one request and never retries. Failures are
/// logged once and then returned unchanged.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CharacterApi: Send)]
pub trait LocalCharacterApi {
    /// Searches characters whose `criterion` field matches `query`.
    ///
    /// A `data` payload holding a single object is returned as a
    /// one-element list.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] on a non-2xx status.
    /// - [`ApiError::MalformedResponse`] if the body is not JSON or lacks `data`.
    /// - [`ApiError::Transport`] if the request cannot be sent.
    async fn search_characters(
        &self,
        query: &str,
        criterion: SearchCriterion,
    ) -> Result<Vec<Character>, ApiError>;

    /// Fetches a single character by ID.
    ///
    /// The decoded body is returned as received; see [`CharacterDetails`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] on a non-2xx status.
    /// - [`ApiError::MalformedResponse`] if the body is not JSON.
    /// - [`ApiError::Transport`] if the request cannot be sent.
    async fn character_details(&self, id: u64) -> Result<CharacterDetails, ApiError>;

    /// Collects the distinct films and TV shows of the unfiltered listing.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] on a non-2xx status.
    /// - [`ApiError::MalformedResponse`] if the body is not JSON or lacks `data`.
    /// - [`ApiError::Transport`] if the request cannot be sent.
    async fn films_and_tv_shows(&self) -> Result<FilmsAndTvShows, ApiError>;
}
