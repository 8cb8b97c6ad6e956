// SPDX-License-Identifier: MPL-2.0
//! Detail screen component encapsulating state and update logic.
//!
//! The component never performs I/O itself. Every transition that needs the
//! network returns an [`Effect`] tagged with the current request generation;
//! the application turns it into a task whose result comes back as a
//! `*Resolved` / [`Message::PosterLoaded`] message carrying that same
//! generation. Results from a superseded generation are dropped.

use crate::app::config::defaults::{ANIMATION_TICK_MS, PLAYER_FADE_MS, SPINNER_SPEED};
use crate::error::TmdbError;
use crate::tmdb::{trailer_url, MovieId, MovieRecord, Poster, SearchResult};
use iced::widget::image;
use std::f32::consts::TAU;

/// Messages handled by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The navigation parameter changed (or the screen mounted).
    Navigate(Option<String>),
    SearchResolved {
        generation: u64,
        result: Result<Vec<SearchResult>, TmdbError>,
    },
    DetailResolved {
        generation: u64,
        result: Result<MovieRecord, TmdbError>,
    },
    /// Poster download and decode finished, successfully or not.
    PosterLoaded {
        generation: u64,
        result: Result<Poster, TmdbError>,
    },
    WatchTrailer,
    ClosePlayer,
    CopyTrailerLink,
    Retry,
    ToggleErrorDetails,
    QueryInputChanged(String),
    QuerySubmitted,
    /// Animation frame.
    Tick,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Search {
        generation: u64,
        query: String,
    },
    /// `id` is `None` when the search came back empty.
    FetchDetail {
        generation: u64,
        id: Option<MovieId>,
    },
    /// `poster_path` is `None` when the record has no poster.
    FetchPoster {
        generation: u64,
        poster_path: Option<String>,
    },
    CopyToClipboard(String),
}

/// Where the current fetch chain stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    DetailFetching,
    Ready,
    Failed,
}

/// The movie currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MovieState {
    #[default]
    NotLoaded,
    Loaded(Box<MovieRecord>),
    Failed(TmdbError),
}

/// Poster frame content.
#[derive(Debug, Clone, Default)]
pub enum PosterState {
    #[default]
    Empty,
    Ready(image::Handle),
    Unavailable(TmdbError),
}

/// Returns the navigation parameter verbatim, or `default` when absent.
pub fn effective_query<'a>(param: Option<&'a str>, default: &'a str) -> &'a str {
    param.unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct State {
    default_query: String,
    param: Option<String>,
    mounted: bool,
    generation: u64,
    phase: Phase,
    movie: MovieState,
    trailer_url: String,
    poster: PosterState,
    fetch_in_progress: bool,
    poster_loading: bool,
    player_visible: bool,
    player_opacity: f32,
    spinner_rotation: f32,
    query_input: String,
    show_error_details: bool,
}

impl State {
    pub fn new(default_query: impl Into<String>) -> Self {
        Self {
            default_query: default_query.into(),
            param: None,
            mounted: false,
            generation: 0,
            phase: Phase::Idle,
            movie: MovieState::NotLoaded,
            trailer_url: trailer_url(None),
            poster: PosterState::Empty,
            fetch_in_progress: false,
            poster_loading: false,
            player_visible: false,
            player_opacity: 0.0,
            spinner_rotation: 0.0,
            query_input: String::new(),
            show_error_details: false,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Navigate(param) => {
                if self.mounted && self.param == param {
                    return Effect::None;
                }
                self.mounted = true;
                self.query_input = param.clone().unwrap_or_default();
                self.param = param;
                self.start_fetch_chain()
            }
            Message::Retry => self.start_fetch_chain(),
            Message::SearchResolved { generation, result } => {
                if self.is_stale(generation, "search") {
                    return Effect::None;
                }
                match result {
                    Ok(results) => {
                        let id = results.first().and_then(|entry| entry.id);
                        match id {
                            Some(id) => log::debug!("Search matched movie {id}"),
                            None => log::info!(
                                "Search for {:?} returned no usable result",
                                self.effective_query()
                            ),
                        }
                        self.phase = Phase::DetailFetching;
                        Effect::FetchDetail { generation, id }
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::DetailResolved { generation, result } => {
                if self.is_stale(generation, "detail") {
                    return Effect::None;
                }
                match result {
                    Ok(record) => {
                        let poster_path = record.poster_path.clone();
                        self.set_movie(MovieState::Loaded(Box::new(record)));
                        self.fetch_in_progress = false;
                        self.phase = Phase::Ready;
                        Effect::FetchPoster {
                            generation,
                            poster_path,
                        }
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::PosterLoaded { generation, result } => {
                if self.is_stale(generation, "poster") {
                    return Effect::None;
                }
                self.poster_loading = false;
                self.poster = match result {
                    Ok(poster) => PosterState::Ready(image::Handle::from_rgba(
                        poster.width,
                        poster.height,
                        poster.pixels,
                    )),
                    Err(err) => {
                        log::warn!("Poster unavailable: {err}");
                        PosterState::Unavailable(err)
                    }
                };
                Effect::None
            }
            Message::WatchTrailer => {
                self.player_visible = true;
                Effect::None
            }
            Message::ClosePlayer => {
                self.player_visible = false;
                Effect::None
            }
            Message::CopyTrailerLink => Effect::CopyToClipboard(self.trailer_url.clone()),
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
            Message::QueryInputChanged(text) => {
                self.query_input = text;
                Effect::None
            }
            Message::QuerySubmitted => {
                let query = Some(self.query_input.clone());
                if self.phase == Phase::Failed && self.param == query {
                    return self.start_fetch_chain();
                }
                self.handle_message(Message::Navigate(query))
            }
            Message::Tick => {
                self.tick();
                Effect::None
            }
        }
    }

    fn start_fetch_chain(&mut self) -> Effect {
        self.generation += 1;
        self.fetch_in_progress = true;
        self.poster_loading = true;
        self.phase = Phase::Searching;

        let query = self.effective_query().to_string();
        log::debug!("Fetch chain #{} started for {query:?}", self.generation);
        Effect::Search {
            generation: self.generation,
            query,
        }
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        let stale = generation != self.generation;
        if stale {
            log::debug!(
                "Discarding stale {what} result (generation {generation}, current {})",
                self.generation
            );
        }
        stale
    }

    fn fail(&mut self, err: TmdbError) -> Effect {
        log::warn!("Could not load movie for {:?}: {err}", self.effective_query());
        self.set_movie(MovieState::Failed(err));
        self.fetch_in_progress = false;
        self.show_error_details = false;
        self.phase = Phase::Failed;
        Effect::None
    }

    /// The trailer URL is recomputed on every record change and nowhere else.
    fn set_movie(&mut self, movie: MovieState) {
        self.movie = movie;
        self.trailer_url = trailer_url(self.record());
    }

    fn tick(&mut self) {
        if self.overlay_visible() {
            self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
        }

        #[allow(clippy::cast_precision_loss)]
        let step = ANIMATION_TICK_MS as f32 / PLAYER_FADE_MS as f32;
        let target = self.player_target_opacity();
        self.player_opacity = if self.player_opacity < target {
            (self.player_opacity + step).min(target)
        } else {
            (self.player_opacity - step).max(target)
        };
    }

    fn player_target_opacity(&self) -> f32 {
        if self.player_visible {
            1.0
        } else {
            0.0
        }
    }

    pub fn effective_query(&self) -> &str {
        effective_query(self.param.as_deref(), &self.default_query)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn movie(&self) -> &MovieState {
        &self.movie
    }

    pub fn record(&self) -> Option<&MovieRecord> {
        match &self.movie {
            MovieState::Loaded(record) => Some(record.as_ref()),
            MovieState::NotLoaded | MovieState::Failed(_) => None,
        }
    }

    pub fn trailer_url(&self) -> &str {
        &self.trailer_url
    }

    pub fn poster(&self) -> &PosterState {
        &self.poster
    }

    pub fn is_fetch_in_progress(&self) -> bool {
        self.fetch_in_progress
    }

    pub fn is_poster_loading(&self) -> bool {
        self.poster_loading
    }

    pub fn is_player_visible(&self) -> bool {
        self.player_visible
    }

    pub fn player_opacity(&self) -> f32 {
        self.player_opacity
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn show_error_details(&self) -> bool {
        self.show_error_details
    }

    /// The poster frame is not rendered on a failed chain, so neither is
    /// its overlay, even though `poster_loading` stays raised until a
    /// `PosterLoaded` arrives.
    pub fn poster_overlay_visible(&self) -> bool {
        self.poster_loading && !matches!(self.movie, MovieState::Failed(_))
    }

    pub fn overlay_visible(&self) -> bool {
        self.fetch_in_progress || self.poster_overlay_visible()
    }

    /// Number of loading overlays on screen.
    pub fn overlay_count(&self) -> usize {
        usize::from(self.fetch_in_progress) + usize::from(self.poster_overlay_visible())
    }

    /// True while the view changes without input: a spinner is turning or
    /// the player panel is mid-fade.
    pub fn is_animating(&self) -> bool {
        self.overlay_visible() || self.player_opacity != self.player_target_opacity()
    }
}
