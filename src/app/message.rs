// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use crate::ui::detail;
use std::time::Instant;

/// Top-level messages consumed by [`crate::app::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Detail(detail::Message),
    /// Animation frame from the tick subscription.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Initial navigation parameter: the movie to search for.
    pub movie: Option<String>,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_MARQUEE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
