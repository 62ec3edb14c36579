//! Disney character database API client module.
//!
//! Handles HTTP requests to the `character` endpoints of
//! `api.disneyapi.dev` and shapes the responses into typed values.

mod api;
mod client;
mod error;
mod types;
mod util;

#[allow(clippy::module_name_repetitions)]
pub use api::{CharacterApi, LocalCharacterApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{CharacterClient, CharacterClientBuilder, DISNEY_API_BASE_URL};
pub use error::ApiError;
pub use types::{Character, CharacterDetails, FilmsAndTvShows, SearchCriterion};
pub use util::{collect_films_and_tv_shows, search_by};
