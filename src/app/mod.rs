// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the detail screen to localization, configuration and
//! the TMDB client, and translates the screen's effects into Iced tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::resolve_request;

use crate::i18n::fluent::I18n;
use crate::tmdb::TmdbClient;
use crate::ui::detail;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    detail: detail::State,
    client: TmdbClient,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.detail.effective_query())
            .field("phase", &self.detail.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Assembles the application from already-resolved parts.
    pub fn with_client(i18n: I18n, client: TmdbClient, config: &Config) -> Self {
        Self {
            i18n,
            detail: detail::State::new(config.tmdb.default_query()),
            client,
            theme_mode: config.general.theme_mode,
        }
    }

    /// Loads configuration, then mounts the detail screen with the CLI
    /// `movie` parameter, which starts the first fetch chain.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let client = TmdbClient::from_env(config.tmdb.client_options());
        let mut app = Self::with_client(i18n, client, &config);
        let task = app.update(Message::Detail(detail::Message::Navigate(flags.movie)));
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Detail(message) => {
                let effect = self.detail.handle_message(message);
                update::effect_task(&self.client, effect)
            }
            Message::Tick(_) => {
                let effect = self.detail.handle_message(detail::Message::Tick);
                update::effect_task(&self.client, effect)
            }
        }
    }

    /// "TITLE - Iced Marquee" once a movie is loaded, the app name otherwise.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self
            .detail
            .record()
            .and_then(|record| record.title.as_deref())
        {
            Some(title) if !title.is_empty() => format!("{title} - {app_name}"),
            _ => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.detail.is_animating())
    }

    /// Read access to the detail screen state.
    pub fn detail(&self) -> &detail::State {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{MovieId, MovieRecord, SearchResult};
    use std::time::Instant;

    fn test_app() -> App {
        let config = Config::default();
        let client = TmdbClient::new(None, config.tmdb.client_options());
        App::with_client(I18n::new(Some("en-US".into()), &config), client, &config)
    }

    #[test]
    fn title_is_app_name_before_load() {
        let app = test_app();
        assert_eq!(app.title(), "Iced Marquee");
    }

    #[test]
    fn title_includes_loaded_movie() {
        let mut app = test_app();
        let _ = app.update(Message::Detail(detail::Message::Navigate(Some(
            "batman".into(),
        ))));
        let _ = app.update(Message::Detail(detail::Message::SearchResolved {
            generation: 1,
            result: Ok(vec![SearchResult {
                id: Some(MovieId(268)),
                title: None,
            }]),
        }));
        let _ = app.update(Message::Detail(detail::Message::DetailResolved {
            generation: 1,
            result: Ok(MovieRecord {
                title: Some("Batman".into()),
                ..MovieRecord::default()
            }),
        }));

        assert_eq!(app.title(), "Batman - Iced Marquee");
        assert!(!app.detail().is_fetch_in_progress());
    }

    #[test]
    fn default_query_comes_from_config() {
        let mut config = Config::default();
        config.tmdb.default_query = Some("alien".into());
        let client = TmdbClient::new(None, config.tmdb.client_options());
        let mut app = App::with_client(I18n::default(), client, &config);

        let _ = app.update(Message::Detail(detail::Message::Navigate(None)));
        assert_eq!(app.detail().effective_query(), "alien");
    }

    #[test]
    fn tick_reaches_the_detail_screen() {
        let mut app = test_app();
        let _ = app.update(Message::Detail(detail::Message::WatchTrailer));
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.detail().player_opacity() > 0.0);
    }

    #[test]
    fn tick_effect_goes_through_effect_dispatch() {
        let mut app = test_app();
        let _ = app.update(Message::Detail(detail::Message::Navigate(None)));
        assert!(app.detail().is_animating());

        let task = app.update(Message::Tick(Instant::now()));
        assert_eq!(task.units(), 0);
        assert!(app.detail().spinner_rotation() > 0.0);
    }

    #[test]
    fn theme_follows_configured_mode() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let client = TmdbClient::new(None, config.tmdb.client_options());
        let app = App::with_client(I18n::default(), client, &config);
        assert_eq!(app.theme(), Theme::Light);
    }
}
