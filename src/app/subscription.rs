// SPDX-License-Identifier: MPL-2.0
//! Subscription wiring.

use super::Message;
use crate::app::config::defaults::ANIMATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame ticks while the detail screen has something moving; nothing
/// otherwise, so an idle screen costs no wakeups.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
