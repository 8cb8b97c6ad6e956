// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Tmdb(TmdbError),
}

/// Failures of the movie metadata chain (search, detail, poster).
///
/// Every outbound call resolves to one of these instead of vanishing, so the
/// detail screen can move to its failed state and tell the user what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmdbError {
    /// `TMDB_API_KEY` is not set (or empty).
    MissingApiKey,

    /// The search returned no results, so there is no id to look up.
    MissingMovieId,

    /// The movie record has no poster path.
    MissingPoster,

    /// Transport failure: DNS, TLS, connection reset, timeout.
    Request(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The body could not be parsed as the expected JSON shape.
    InvalidResponse(String),

    /// Poster bytes could not be decoded as an image.
    ImageDecode(String),
}

impl TmdbError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TmdbError::MissingApiKey => "error-tmdb-missing-api-key",
            TmdbError::MissingMovieId => "error-tmdb-no-results",
            TmdbError::MissingPoster => "error-tmdb-missing-poster",
            TmdbError::Request(_) => "error-tmdb-request",
            TmdbError::Status(404) => "error-tmdb-not-found",
            TmdbError::Status(_) => "error-tmdb-status",
            TmdbError::InvalidResponse(_) => "error-tmdb-invalid-response",
            TmdbError::ImageDecode(_) => "error-tmdb-image-decode",
        }
    }
}

impl fmt::Display for TmdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmdbError::MissingApiKey => write!(f, "TMDB_API_KEY is not set"),
            TmdbError::MissingMovieId => write!(f, "Search returned no movie"),
            TmdbError::MissingPoster => write!(f, "Movie has no poster"),
            TmdbError::Request(msg) => write!(f, "Request failed: {}", msg),
            TmdbError::Status(code) => write!(f, "HTTP status: {}", code),
            TmdbError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            TmdbError::ImageDecode(msg) => write!(f, "Image decode failed: {}", msg),
        }
    }
}

impl From<reqwest::Error> for TmdbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TmdbError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            TmdbError::Status(status.as_u16())
        } else {
            TmdbError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TmdbError {
    fn from(err: serde_json::Error) -> Self {
        TmdbError::InvalidResponse(err.to_string())
    }
}

impl From<image_rs::ImageError> for TmdbError {
    fn from(err: image_rs::ImageError) -> Self {
        TmdbError::ImageDecode(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Tmdb(e) => write!(f, "TMDB Error: {}", e),
        }
    }
}

impl From<TmdbError> for Error {
    fn from(err: TmdbError) -> Self {
        Error::Tmdb(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
