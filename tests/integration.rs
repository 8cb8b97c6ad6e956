// SPDX-License-Identifier: MPL-2.0
use iced_marquee::app::resolve_request;
use iced_marquee::config;
use iced_marquee::error::TmdbError;
use iced_marquee::i18n::fluent::I18n;
use iced_marquee::tmdb::{ClientOptions, MovieId, TmdbClient};
use iced_marquee::ui::detail::{Effect, Message, MovieState, Phase, PosterState, State};
use serde_json::json;
use std::io::Cursor;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::new(
        Some(API_KEY.to_string()),
        ClientOptions {
            api_base_url: server.uri(),
            image_base_url: format!("{}/t/p/w500", server.uri()),
            timeout: Duration::from_secs(5),
        },
    )
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 30, 30, 255]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image_rs::ImageFormat::Png)
        .expect("encode png");
    buffer.into_inner()
}

fn batman_record() -> serde_json::Value {
    json!({
        "title": "Batman",
        "poster_path": "/batman.png",
        "genres": [
            { "id": 14, "name": "Fantasy" },
            { "id": 28, "name": "Action" }
        ],
        "original_language": "en",
        "release_date": "1989-06-21",
        "runtime": 126,
        "vote_average": 7.2,
        "overview": "Batman must face the Joker.",
        "videos": {
            "results": [
                { "type": "Featurette", "key": "feat" },
                { "type": "Teaser", "key": "teas" },
                { "type": "Trailer", "key": "dgC9Q0uhX70" }
            ]
        }
    })
}

/// Feeds every effect through the client until the chain settles.
async fn drive(state: &mut State, client: &TmdbClient, first: Effect) {
    let mut effect = first;
    while let Some(message) = resolve_request(client.clone(), effect).await {
        effect = state.handle_message(message);
    }
}

#[tokio::test]
async fn batman_navigation_loads_the_full_screen() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("query", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 268 }, { "id": 414 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/268"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("append_to_response", "videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batman_record()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/t/p/w500/batman.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(4, 6)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut state = State::new("avengers");
    let first = state.handle_message(Message::Navigate(Some("batman".into())));
    assert!(state.is_fetch_in_progress());
    assert!(state.is_poster_loading());

    drive(&mut state, &client, first).await;

    assert_eq!(state.phase(), Phase::Ready);
    assert!(!state.is_fetch_in_progress());
    assert!(!state.is_poster_loading());
    assert_eq!(state.overlay_count(), 0);

    let record = state.record().expect("record loaded");
    assert_eq!(record.title.as_deref(), Some("Batman"));
    assert_eq!(record.genres().len(), 2);
    assert_eq!(
        record.runtime.as_ref().map(ToString::to_string).as_deref(),
        Some("126")
    );
    assert_eq!(
        state.trailer_url(),
        "https://www.youtube.com/watch?v=dgC9Q0uhX70"
    );
    assert!(matches!(state.poster(), PosterState::Ready(_)));
    assert!(!state.is_player_visible());
}

#[tokio::test]
async fn absent_param_searches_the_default_term() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "avengers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut state = State::new("avengers");
    let first = state.handle_message(Message::Navigate(None));
    drive(&mut state, &client, first).await;

    // Empty results: the detail request goes out without an id and fails
    // locally, without reaching the server.
    assert_eq!(state.movie(), &MovieState::Failed(TmdbError::MissingMovieId));
    assert!(!state.is_fetch_in_progress());
    assert_eq!(state.trailer_url(), "https://www.youtube.com/watch?v=");
}

#[tokio::test]
async fn missing_poster_path_still_clears_poster_loading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 7 }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Posterless",
            "poster_path": null,
            "videos": { "results": [] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut state = State::new("avengers");
    let first = state.handle_message(Message::Navigate(Some("posterless".into())));
    drive(&mut state, &client, first).await;

    assert!(!state.is_poster_loading());
    assert!(matches!(
        state.poster(),
        PosterState::Unavailable(TmdbError::MissingPoster)
    ));
    assert_eq!(state.trailer_url(), "https://www.youtube.com/watch?v=");
}

#[tokio::test]
async fn server_error_ends_in_failed_and_retry_recovers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut state = State::new("avengers");
    let first = state.handle_message(Message::Navigate(Some("batman".into())));
    drive(&mut state, &client, first).await;

    assert_eq!(state.movie(), &MovieState::Failed(TmdbError::Status(503)));
    assert_eq!(state.phase(), Phase::Failed);

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 268 }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/268"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batman_record()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/t/p/w500/batman.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(2, 3)))
        .mount(&server)
        .await;

    let retry = state.handle_message(Message::Retry);
    drive(&mut state, &client, retry).await;

    assert_eq!(state.generation(), 2);
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(
        state.record().and_then(|r| r.title.as_deref()),
        Some("Batman")
    );
}

#[tokio::test]
async fn results_of_a_superseded_navigation_are_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "alien"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 348 }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut state = State::new("avengers");
    let stale = state.handle_message(Message::Navigate(Some("alien".into())));
    let _current = state.handle_message(Message::Navigate(Some("batman".into())));

    let reply = resolve_request(client.clone(), stale)
        .await
        .expect("search reply");
    assert_eq!(state.handle_message(reply), Effect::None);
    assert_eq!(state.phase(), Phase::Searching);
    assert_eq!(state.effective_query(), "batman");
}

#[tokio::test]
async fn client_reports_status_and_malformed_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/500"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let not_found = client.movie_details(Some(MovieId(404))).await;
    assert_eq!(not_found, Err(TmdbError::Status(404)));

    let malformed = client.movie_details(Some(MovieId(500))).await;
    assert!(matches!(malformed, Err(TmdbError::InvalidResponse(_))));
}

#[tokio::test]
async fn missing_api_key_fails_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TmdbClient::new(
        None,
        ClientOptions {
            api_base_url: server.uri(),
            image_base_url: server.uri(),
            timeout: Duration::from_secs(5),
        },
    );

    assert_eq!(
        client.search_movies("batman").await,
        Err(TmdbError::MissingApiKey)
    );
}

#[tokio::test]
async fn undecodable_poster_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/t/p/w500/broken.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not an image".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.poster(Some("/broken.jpg")).await;
    assert!(matches!(result, Err(TmdbError::ImageDecode(_))));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    std::fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("watch-trailer"), "Watch Trailer");

    std::fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn tmdb_section_is_read_from_config_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[tmdb]\ndefault_query = \"dune\"\nrequest_timeout_secs = 10\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.tmdb.default_query(), "dune");
    assert_eq!(
        loaded.tmdb.client_options().timeout,
        Duration::from_secs(10)
    );
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[tmdb\nbroken")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(loaded.tmdb.default_query(), "avengers");
}
