// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Query**: Fallback search term when no movie is requested
//! - **TMDB**: API and image CDN endpoints, request timeout
//! - **Animation**: Spinner and player fade timing

// ==========================================================================
// Query Defaults
// ==========================================================================

/// Search term used when no `movie` parameter was given.
pub const DEFAULT_QUERY: &str = "avengers";

// ==========================================================================
// TMDB Defaults
// ==========================================================================

/// TMDB v3 API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Poster CDN root, sized for a 500px wide poster.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks while something is moving.
pub const ANIMATION_TICK_MS: u64 = 16;

/// Spinner rotation per tick, in radians.
pub const SPINNER_SPEED: f32 = 0.1;

/// Player panel fade duration in milliseconds.
pub const PLAYER_FADE_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(ANIMATION_TICK_MS > 0);
    assert!(PLAYER_FADE_MS >= ANIMATION_TICK_MS);
    assert!(SPINNER_SPEED > 0.0);
};
