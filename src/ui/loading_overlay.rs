// SPDX-License-Identifier: MPL-2.0
//! Loading overlay: a translucent backdrop with a centered ring spinner.
//!
//! Stateless. The parent decides whether to mount it and supplies the shared
//! spinner phase so every visible overlay turns in sync.

use crate::ui::design_tokens::palette;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, opaque};
use iced::{Element, Length};

/// Fills its parent; swallows pointer input aimed at what lies beneath.
pub fn view<'a, Message: 'static>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element::<Message>();

    opaque(
        container(spinner)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop),
    )
}
