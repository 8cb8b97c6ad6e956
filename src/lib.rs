// SPDX-License-Identifier: MPL-2.0
//! `iced_marquee` shows one movie's details from The Movie Database, built
//! with the Iced GUI framework.
//!
//! A search query resolves to a movie record (with its videos appended), from
//! which the poster, the facts and a trailer link are rendered. Fluent drives
//! localization and user preferences live in a small TOML file.

pub mod app;
pub mod error;
pub mod i18n;
pub mod tmdb;
pub mod ui;

pub use app::config;
