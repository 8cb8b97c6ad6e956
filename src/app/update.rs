// SPDX-License-Identifier: MPL-2.0
//! Translation of detail-screen effects into Iced tasks.

use super::Message;
use crate::tmdb::TmdbClient;
use crate::ui::detail::{self, Effect};
use iced::{clipboard, Task};

/// Turns an [`Effect`] into the task that carries it out.
pub(super) fn effect_task(client: &TmdbClient, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::CopyToClipboard(contents) => {
            log::debug!("Copying trailer link to clipboard");
            clipboard::write(contents)
        }
        request => {
            let reply = resolve_request(client.clone(), request);
            Task::future(reply).then(|reply| match reply {
                Some(message) => Task::done(Message::Detail(message)),
                None => Task::none(),
            })
        }
    }
}

/// Performs the network request behind `effect` and wraps the outcome in the
/// message the detail screen expects, tagged with the request's generation.
///
/// Returns `None` for effects that involve no request.
pub async fn resolve_request(client: TmdbClient, effect: Effect) -> Option<detail::Message> {
    match effect {
        Effect::Search { generation, query } => {
            log::debug!("Searching TMDB for {query:?}");
            let result = client.search_movies(&query).await;
            Some(detail::Message::SearchResolved { generation, result })
        }
        Effect::FetchDetail { generation, id } => {
            let result = client.movie_details(id).await;
            Some(detail::Message::DetailResolved { generation, result })
        }
        Effect::FetchPoster {
            generation,
            poster_path,
        } => {
            let result = client.poster(poster_path.as_deref()).await;
            Some(detail::Message::PosterLoaded { generation, result })
        }
        Effect::None | Effect::CopyToClipboard(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::TmdbError;

    fn offline_client() -> TmdbClient {
        TmdbClient::new(None, Config::default().tmdb.client_options())
    }

    #[tokio::test]
    async fn local_effects_resolve_to_nothing() {
        assert!(resolve_request(offline_client(), Effect::None).await.is_none());
        assert!(
            resolve_request(offline_client(), Effect::CopyToClipboard("x".into()))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn absent_id_resolves_without_network() {
        let reply = resolve_request(
            offline_client(),
            Effect::FetchDetail {
                generation: 3,
                id: None,
            },
        )
        .await;

        match reply {
            Some(detail::Message::DetailResolved { generation, result }) => {
                assert_eq!(generation, 3);
                assert_eq!(result, Err(TmdbError::MissingMovieId));
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }
}
