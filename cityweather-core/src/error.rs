use thiserror::Error;

/// Message shown when a non-2xx weather response carries no usable `message`.
pub const GENERIC_API_ERROR: &str = "City not found or API error.";

/// Message shown when the weather request fails before a response is parsed.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch weather data. Please try again.";

/// Message shown when submit is pressed with an empty city.
pub const EMPTY_CITY_ERROR: &str = "Please enter a city name.";

/// Errors surfaced by the lookup widget.
///
/// The `Display` text of each variant is the exact string shown inline to the
/// user. Transport and parse failures keep their source for logging but
/// collapse to one generic message on screen.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Submit pressed with an empty or whitespace-only city. No request is made.
    #[error("{EMPTY_CITY_ERROR}")]
    EmptyCity,

    /// Non-2xx weather response; carries the provider's `message` when the
    /// error body had one, otherwise [`GENERIC_API_ERROR`].
    #[error("{0}")]
    Api(String),

    /// The request could not be sent or the response body not read.
    #[error("{GENERIC_FETCH_ERROR}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response body that does not match the expected shape.
    #[error("{GENERIC_FETCH_ERROR}")]
    MalformedResponse(#[source] serde_json::Error),
}
