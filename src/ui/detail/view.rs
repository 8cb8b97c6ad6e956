// SPDX-License-Identifier: MPL-2.0
//! Detail screen rendering.
//!
//! Layers, bottom to top: the page (search bar, then the poster and facts or
//! the error panel), the trailer player panel, and the page-level loading
//! overlay while a fetch chain is running. The poster frame carries its own
//! overlay while the poster is loading, so two spinners can show at once.

use super::component::{Message, MovieState, PosterState, State};
use super::genres;
use crate::error::TmdbError;
use crate::i18n::fluent::I18n;
use crate::tmdb::MovieRecord;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::loading_overlay;
use crate::ui::styles;
use iced::widget::svg::{self, Svg};
use iced::widget::{button, column, container, image, row, text, text_input, Space, Stack};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let body: Element<'a, Message> = match state.movie() {
        MovieState::NotLoaded => detail_layout(state, None, i18n),
        MovieState::Loaded(record) => detail_layout(state, Some(record.as_ref()), i18n),
        MovieState::Failed(err) => error_view(state, err, i18n),
    };

    let page = column![search_bar(state, i18n), body]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(player_layer(state, i18n));

    if state.is_fetch_in_progress() {
        layers = layers.push(loading_overlay::view::<Message>(state.spinner_rotation()));
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn search_bar<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), state.query_input())
        .on_input(Message::QueryInputChanged)
        .on_submit(Message::QuerySubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let submit = button(text(i18n.tr("search-button")))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::QuerySubmitted)
        .style(styles::button_primary);

    row![input, submit]
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}

/// Poster plus facts. With no record every field renders blank.
fn detail_layout<'a>(
    state: &'a State,
    record: Option<&'a MovieRecord>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let title = record
        .and_then(|r| r.title.as_deref())
        .unwrap_or_default()
        .to_uppercase();
    let language = record
        .and_then(|r| r.original_language.as_deref())
        .unwrap_or_default()
        .to_uppercase();
    let release = record
        .and_then(|r| r.release_date.as_deref())
        .unwrap_or_default();
    let runtime = record
        .and_then(|r| r.runtime.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default();
    let rating = record
        .and_then(|r| r.vote_average.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default();
    let overview = record
        .and_then(|r| r.overview.as_deref())
        .unwrap_or_default();
    let genre_list = record.map(MovieRecord::genres).unwrap_or_default();

    let facts = row![
        text(i18n.tr_with_args("label-language", &[("value", language.as_str())])),
        text(i18n.tr_with_args("label-release", &[("value", release)])),
        text(i18n.tr_with_args("label-runtime", &[("value", runtime.as_str())])),
        text(i18n.tr_with_args("label-rating", &[("value", rating.as_str())])),
    ]
    .spacing(spacing::LG);

    let watch_trailer = button(
        row![
            icons::tinted(icons::play(), sizing::ICON_SM, palette::BLACK),
            text(i18n.tr("watch-trailer")),
        ]
        .spacing(spacing::XS)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .on_press(Message::WatchTrailer)
    .style(styles::button_watch_trailer);

    let info = column![
        text(title).size(typography::DISPLAY),
        genres::view::<Message>(genre_list),
        facts,
        column![
            text(i18n.tr("overview-heading")).size(typography::TITLE_SM),
            text(overview).size(typography::BODY_LG),
        ]
        .spacing(spacing::XS),
        watch_trailer,
    ]
    .spacing(spacing::MD)
    .width(Length::Fill);

    row![poster_view(state, i18n), info]
        .spacing(spacing::XL)
        .into()
}

fn poster_view<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.poster() {
        PosterState::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        PosterState::Unavailable(err) => column![
            text(i18n.tr("poster-unavailable")).size(typography::BODY),
            text(i18n.tr(err.i18n_key())).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .into(),
        PosterState::Empty => Space::new().into(),
    };

    let frame = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(styles::container::poster_frame);

    let mut layers = Stack::new()
        .width(Length::Fixed(sizing::POSTER_WIDTH))
        .height(Length::Fixed(sizing::POSTER_HEIGHT))
        .push(frame);

    if state.poster_overlay_visible() {
        layers = layers.push(loading_overlay::view::<Message>(state.spinner_rotation()));
    }

    layers.into()
}

fn error_view<'a>(state: &'a State, err: &TmdbError, i18n: &I18n) -> Element<'a, Message> {
    centered_error_view(
        ErrorDisplay::new()
            .title(i18n.tr("error-title"))
            .message(i18n.tr(err.i18n_key()))
            .details(err.to_string())
            .details_visible(state.show_error_details())
            .details_labels(
                i18n.tr("error-show-details"),
                i18n.tr("error-hide-details"),
                i18n.tr("error-details-heading"),
            )
            .action(i18n.tr("error-retry"), Message::Retry)
            .on_toggle_details(Message::ToggleErrorDetails),
    )
}

/// Always mounted. Hidden means fully transparent with inert controls.
fn player_layer<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let alpha = state.player_opacity();
    let active = state.is_player_visible();

    let close = button(close_icon(alpha))
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding(spacing::XXS)
        .on_press_maybe(active.then_some(Message::ClosePlayer))
        .style(styles::button::player_close(alpha));

    let header = container(
        row![
            text(i18n.tr("playing-trailer")).size(typography::TITLE_SM),
            Space::new().width(Length::Fill),
            close,
        ]
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::player_header(alpha));

    let copy_link = button(
        row![
            icons::tinted(
                icons::copy(),
                sizing::ICON_SM,
                Color {
                    a: alpha,
                    ..palette::PRIMARY_500
                },
            ),
            text(i18n.tr("player-copy-link")),
        ]
        .spacing(spacing::XS)
        .align_y(Alignment::Center),
    )
    .on_press_maybe(active.then_some(Message::CopyTrailerLink))
    .style(styles::button::link(alpha));

    let surface = container(
        column![
            icons::tinted(
                icons::play(),
                sizing::ICON_XL,
                Color {
                    a: alpha,
                    ..palette::OFF_WHITE
                },
            ),
            text(state.trailer_url()).size(typography::BODY),
            copy_link,
            text(i18n.tr("player-hint")).size(typography::CAPTION),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PLAYER_SURFACE_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    let panel = container(column![header, surface])
        .width(Length::Fixed(sizing::PLAYER_WIDTH))
        .style(styles::container::player_panel(alpha));

    container(panel)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Alignment::Center)
        .into()
}

/// Half-transparent cross that firms up on hover, scaled by the panel fade.
fn close_icon(alpha: f32) -> Svg<'static> {
    icons::cross()
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(move |_theme: &Theme, status: svg::Status| {
            let emphasis = match status {
                svg::Status::Hovered => opacity::OVERLAY_STRONG,
                _ => opacity::OVERLAY_MEDIUM,
            };
            svg::Style {
                color: Some(Color {
                    a: emphasis * alpha,
                    ..palette::OFF_WHITE
                }),
            }
        })
}
