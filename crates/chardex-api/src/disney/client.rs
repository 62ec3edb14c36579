//! `CharacterClient` - Disney character database API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalCharacterApi;
use super::error::ApiError;
use super::types::{Character, CharacterDetails, Envelope, FilmsAndTvShows, SearchCriterion};
use super::util::{collect_films_and_tv_shows, report_failure};

/// Default base URL for the Disney API.
pub const DISNEY_API_BASE_URL: &str = "https://api.disneyapi.dev/";

/// Disney character database API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CharacterClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `CharacterClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CharacterClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl CharacterClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (config override, wiremock in tests).
    ///
    /// A missing trailing slash is added so that endpoint paths are joined
    /// below the given path instead of replacing its last segment.
    #[must_use]
    pub fn base_url(mut self, mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<CharacterClient, ApiError> {
        let user_agent = self
            .user_agent
            .ok_or(ApiError::Config("user_agent is required"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DISNEY_API_BASE_URL)?,
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(CharacterClient {
            http_client,
            base_url,
        })
    }
}

impl CharacterClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> CharacterClientBuilder {
        CharacterClientBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the search URL for `query` matched against `criterion`.
    ///
    /// The query is percent-encoded component-wise (space becomes `%20`,
    /// not `+`).
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint path cannot be joined to the base URL.
    pub fn search_url(&self, query: &str, criterion: SearchCriterion) -> Result<Url, ApiError> {
        let mut url = self.base_url.join("character")?;
        let pair = format!("{}={}", criterion.query_param(), urlencoding::encode(query));
        url.set_query(Some(&pair));
        Ok(url)
    }

    /// Builds the detail URL for a character ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint path cannot be joined to the base URL.
    pub fn details_url(&self, id: u64) -> Result<Url, ApiError> {
        Ok(self.base_url.join(&format!("character/{id}"))?)
    }

    /// Builds the unfiltered listing URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint path cannot be joined to the base URL.
    pub fn listing_url(&self) -> Result<Url, ApiError> {
        Ok(self.base_url.join("character")?)
    }

    /// Sends a single GET request and returns the body of a 2xx response.
    #[instrument(skip_all)]
    async fn get_text(&self, url: Url) -> Result<String, ApiError> {
        tracing::debug!(url = %url, "Disney API request");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Network { status });
        }

        let body = response.text().await?;
        tracing::debug!(body_len = body.len(), "Disney API response received");
        Ok(body)
    }

    /// Decodes a listing/search body and unwraps its `data` envelope.
    pub(crate) fn parse_character_envelope(body: &str) -> Result<Vec<Character>, ApiError> {
        let raw_result: Result<Envelope, _> = serde_json::from_str(body);
        let envelope = raw_result.map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        envelope.into_characters()
    }

    /// Decodes a detail body without touching its shape.
    pub(crate) fn parse_details(body: &str) -> Result<CharacterDetails, ApiError> {
        let raw_result: Result<serde_json::Value, _> = serde_json::from_str(body);
        let value = raw_result.map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(CharacterDetails::new(value))
    }
}

impl LocalCharacterApi for CharacterClient {
    #[instrument(skip_all, fields(criterion = %criterion))]
    async fn search_characters(
        &self,
        query: &str,
        criterion: SearchCriterion,
    ) -> Result<Vec<Character>, ApiError> {
        let result: Result<Vec<Character>, ApiError> = async {
            let url = self.search_url(query, criterion)?;
            let body = self.get_text(url).await?;
            Self::parse_character_envelope(&body)
        }
        .await;
        report_failure(result, "Error searching characters!")
    }

    #[instrument(skip_all, fields(id = id))]
    async fn character_details(&self, id: u64) -> Result<CharacterDetails, ApiError> {
        let result: Result<CharacterDetails, ApiError> = async {
            let url = self.details_url(id)?;
            let body = self.get_text(url).await?;
            Self::parse_details(&body)
        }
        .await;
        report_failure(result, "Error fetching character details!")
    }

    #[instrument(skip_all)]
    async fn films_and_tv_shows(&self) -> Result<FilmsAndTvShows, ApiError> {
        let result: Result<FilmsAndTvShows, ApiError> = async {
            let url = self.listing_url()?;
            let body = self.get_text(url).await?;
            let characters = Self::parse_character_envelope(&body)?;
            Ok(collect_films_and_tv_shows(&characters))
        }
        .await;
        report_failure(result, "Error fetching films and TV shows!")
    }
}
