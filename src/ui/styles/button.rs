// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (search, retry).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// "Watch Trailer": flat white block, light gray on hover.
pub fn watch_trailer(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_300,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close control of the player header.
///
/// `alpha` is the current panel opacity so the control fades with its panel.
pub fn player_close(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (text_alpha, background) = match status {
            button::Status::Hovered | button::Status::Pressed => (
                opacity::OVERLAY_STRONG,
                Some(Background::Color(Color {
                    a: alpha,
                    ..palette::GRAY_950
                })),
            ),
            _ => (opacity::OVERLAY_MEDIUM, None),
        };

        button::Style {
            background,
            text_color: Color {
                a: text_alpha * alpha,
                ..palette::OFF_WHITE
            },
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text-like button (copy link).
pub fn link(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => palette::PRIMARY_500,
        };

        button::Style {
            background: None,
            text_color: Color { a: alpha, ..color },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
