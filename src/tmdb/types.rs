// SPDX-License-Identifier: MPL-2.0
//! Response shapes of the TMDB endpoints used by the detail screen.
//!
//! Every field is optional: TMDB omits or nulls fields freely, and the screen
//! must render whatever subset arrived. Numbers that TMDB sometimes serves as
//! strings (runtime, rating) go through [`NumberOrText`].

use serde::Deserialize;
use std::fmt;

/// TMDB movie identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A value TMDB may encode either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{n}"),
            NumberOrText::Text(s) => f.write_str(s),
        }
    }
}

/// `GET /search/movie` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

/// One entry of the search result list. Only the id is used downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Genre tag attached to a movie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the embedded `videos` collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

impl Video {
    /// Video type TMDB uses for official trailers.
    pub const TRAILER: &'static str = "Trailer";

    pub fn is_trailer(&self) -> bool {
        self.kind.as_deref() == Some(Self::TRAILER)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoCollection {
    #[serde(default)]
    pub results: Option<Vec<Video>>,
}

/// `GET /movie/{id}?append_to_response=videos` body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<NumberOrText>,
    #[serde(default)]
    pub vote_average: Option<NumberOrText>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub videos: Option<VideoCollection>,
}

impl MovieRecord {
    /// Embedded videos in response order, empty when the sub-resource is absent.
    pub fn videos(&self) -> &[Video] {
        self.videos
            .as_ref()
            .and_then(|collection| collection.results.as_deref())
            .unwrap_or_default()
    }

    pub fn genres(&self) -> &[Genre] {
        self.genres.as_deref().unwrap_or_default()
    }
}
