// SPDX-License-Identifier: MPL-2.0
//! Genre list rendering.

use crate::tmdb::Genre;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, Row};
use iced::{Alignment, Element};

const SEPARATOR: &str = "•";

/// Whether the chip at `index` of `total` is followed by a separator.
pub fn has_separator(index: usize, total: usize) -> bool {
    index + 1 < total
}

/// One genre name, trailed by a separator unless it is the last one.
pub fn chip<'a, Message: 'a>(name: &'a str, index: usize, total: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(text(name).size(typography::BODY_LG));
    if has_separator(index, total) {
        row = row.push(text(SEPARATOR).size(typography::BODY_LG));
    }
    row.into()
}

/// Genres in response order. Nameless entries keep their slot.
pub fn view<'a, Message: 'a>(genres: &'a [Genre]) -> Element<'a, Message> {
    let total = genres.len();
    genres
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, genre)| {
            row.push(chip(genre.name.as_deref().unwrap_or_default(), index, total))
        })
        .into()
}
