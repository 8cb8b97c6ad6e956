// SPDX-License-Identifier: MPL-2.0
//! The Movie Database (TMDB) access: response types, HTTP client, poster
//! decoding and trailer selection.

pub mod client;
pub mod poster;
pub mod trailer;
pub mod types;

pub use client::{ClientOptions, TmdbClient, ENV_API_KEY};
pub use poster::Poster;
pub use trailer::{select_trailer, trailer_url, YOUTUBE_WATCH_URL};
pub use types::{Genre, MovieId, MovieRecord, NumberOrText, SearchResult, Video, VideoCollection};
