// SPDX-License-Identifier: MPL-2.0
//! Movie detail screen: fetch orchestration state and its rendering.

pub mod component;
pub mod genres;
pub mod view;

pub use component::{effective_query, Effect, Message, MovieState, Phase, PosterState, State};
pub use view::{view, ViewContext};
