//! Character API utility functions.

use std::collections::HashSet;

use tracing::instrument;

use super::api::LocalCharacterApi;
use super::error::ApiError;
use super::types::{Character, FilmsAndTvShows, SearchCriterion};

/// Collects distinct film and TV show titles across `characters`.
///
/// Titles keep the order in which they are first seen; duplicates are
/// detected by exact string equality. Characters without `films` or
/// `tvShows` are skipped.
#[must_use]
pub fn collect_films_and_tv_shows(characters: &[Character]) -> FilmsAndTvShows {
    let mut summary = FilmsAndTvShows::default();
    let mut seen_films: HashSet<&str> = HashSet::new();
    let mut seen_tv_shows: HashSet<&str> = HashSet::new();

    for character in characters {
        for film in character.films.iter().flatten() {
            if seen_films.insert(film.as_str()) {
                summary.films.push(film.clone());
            }
        }
        for show in character.tv_shows.iter().flatten() {
            if seen_tv_shows.insert(show.as_str()) {
                summary.tv_shows.push(show.clone());
            }
        }
    }

    summary
}

/// Searches characters with a criterion given in its string form.
///
/// The criterion is parsed before anything is sent, so an unknown value
/// never reaches the network.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCriterion`] if `criterion` is not one of
/// `name`, `film`, `tvShow`, otherwise whatever
/// [`LocalCharacterApi::search_characters`] returns.
#[instrument(skip_all, fields(criterion = criterion))]
pub async fn search_by(
    api: &(impl LocalCharacterApi + Sync),
    query: &str,
    criterion: &str,
) -> Result<Vec<Character>, ApiError> {
    let parsed = report_failure(
        criterion.parse::<SearchCriterion>(),
        "Error searching characters!",
    )?;
    api.search_characters(query, parsed).await
}

/// Logs a failed operation at `WARN` and hands the result back unchanged.
pub(crate) fn report_failure<T>(result: Result<T, ApiError>, context: &str) -> Result<T, ApiError> {
    if let Err(ref err) = result {
        tracing::warn!(error = %err, "{context}");
    }
    result
}
