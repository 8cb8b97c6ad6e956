// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;

pub use button::{primary as button_primary, watch_trailer as button_watch_trailer};
