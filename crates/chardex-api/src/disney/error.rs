//! `ApiError` - failures reported by the character API client.

/// Errors returned by the character API operations.
///
/// Display strings are meant to be shown to the end user verbatim.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiError {
    /// The search criterion is not one of `name`, `film`, `tvShow`.
    ///
    /// Detected before any request is sent.
    #[error("Invalid search criterion: {0}")]
    InvalidCriterion(String),

    /// The server answered with a non-2xx status.
    #[error("Network response was not ok! (HTTP {status})")]
    Network {
        /// HTTP status returned by the server.
        status: reqwest::StatusCode,
    },

    /// The body could not be decoded or lacks the `data` envelope.
    #[error("No characters found or API response format is incorrect ({0})")]
    MalformedResponse(String),

    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be built from the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client was built with missing or invalid settings.
    #[error("invalid client configuration: {0}")]
    Config(&'static str),
}
