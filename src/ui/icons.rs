// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVGs embedded at compile time via `include_bytes!`
//! and tinted at render time, so one asset serves every background. Handles
//! are cached with `OnceLock` and cloned per use.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_player`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(play, "play.svg", "Play icon: filled triangle pointing right.");
define_icon!(cross, "close.svg", "Cross icon: two crossing strokes.");
define_icon!(copy, "copy.svg", "Copy icon: two overlapping sheets.");
define_icon!(warning, "warning.svg", "Warning icon: exclamation in a triangle.");

/// Sizes an icon square and tints it with a flat color.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
