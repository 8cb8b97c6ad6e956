// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": each screen owns a `State`, handles
//! its own `Message`s and reports side effects upward as an `Effect`.
//!
//! # Screens
//!
//! - [`detail`] - Movie detail with poster, facts and the trailer panel
//!
//! # Shared Infrastructure
//!
//! - [`loading_overlay`] - Spinner on a translucent backdrop
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and tinting

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod icons;
pub mod loading_overlay;
pub mod styles;
pub mod theming;
pub mod widgets;
