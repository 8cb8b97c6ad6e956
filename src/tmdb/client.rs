// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the three outbound calls of the detail screen.
//!
//! The client is cheap to clone (the underlying `reqwest::Client` is
//! reference-counted) so a copy can be moved into each `Task::perform` future.

use super::poster::Poster;
use super::types::{MovieId, MovieRecord, SearchResponse, SearchResult};
use crate::error::TmdbError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Environment variable holding the TMDB API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Connection settings for [`TmdbClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// API root, e.g. `https://api.themoviedb.org/3`.
    pub api_base_url: String,
    /// Poster CDN root including the size segment, e.g. `https://image.tmdb.org/t/p/w500`.
    pub image_base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: Option<String>,
    options: ClientOptions,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, options: ClientOptions) -> Self {
        let http = match reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("IcedMarquee/", env!("CARGO_PKG_VERSION")))
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                log::warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            }
        };

        Self {
            http,
            api_key: api_key.filter(|key| !key.is_empty()),
            options,
        }
    }

    /// Reads the API key from [`ENV_API_KEY`].
    pub fn from_env(options: ClientOptions) -> Self {
        let api_key = std::env::var(ENV_API_KEY).ok();
        if api_key.as_deref().is_none_or(str::is_empty) {
            log::warn!("{ENV_API_KEY} is not set; metadata requests will fail");
        }
        Self::new(api_key, options)
    }

    /// `GET /search/movie?api_key=…&query=…`
    pub async fn search_movies(&self, query: &str) -> Result<Vec<SearchResult>, TmdbError> {
        let url = format!("{}/search/movie", self.api_base());
        let response: SearchResponse = self.get_json(&url, &[("query", query)]).await?;
        let results = response.into_results();
        log::debug!("Search {query:?} returned {} result(s)", results.len());
        Ok(results)
    }

    /// `GET /movie/{id}?api_key=…&append_to_response=videos`
    ///
    /// An absent id short-circuits with [`TmdbError::MissingMovieId`].
    pub async fn movie_details(&self, id: Option<MovieId>) -> Result<MovieRecord, TmdbError> {
        let id = id.ok_or(TmdbError::MissingMovieId)?;
        let url = format!("{}/movie/{id}", self.api_base());
        let record: MovieRecord = self
            .get_json(&url, &[("append_to_response", "videos")])
            .await?;
        log::debug!("Movie {id} resolved: {record:?}");
        Ok(record)
    }

    /// Downloads and decodes a poster. An absent path short-circuits with
    /// [`TmdbError::MissingPoster`].
    pub async fn poster(&self, poster_path: Option<&str>) -> Result<Poster, TmdbError> {
        let poster_path = poster_path.ok_or(TmdbError::MissingPoster)?;
        let url = self.poster_url(poster_path);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TmdbError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        Poster::decode(&bytes)
    }

    /// Absolute poster URL for a relative TMDB path (`/abc.jpg` or `abc.jpg`).
    pub fn poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.options.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }

    fn api_base(&self) -> &str {
        self.options.api_base_url.trim_end_matches('/')
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let api_key = self.api_key.as_deref().ok_or(TmdbError::MissingApiKey)?;

        let response = self
            .http
            .get(url)
            .query(&[("api_key", api_key)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TmdbError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
