// SPDX-License-Identifier: MPL-2.0
//! Trailer selection from a movie's embedded video collection.

use super::types::{MovieRecord, Video};

/// Watch URL prefix handed to the external player.
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Picks the video to play: the first entry typed `Trailer`, else index 0.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|video| video.is_trailer())
        .or_else(|| videos.first())
}

/// Builds the playback URL for a record.
///
/// The key segment is empty when there is no record, no video, or the chosen
/// video has no key.
pub fn trailer_url(record: Option<&MovieRecord>) -> String {
    let key = record
        .and_then(|record| select_trailer(record.videos()))
        .and_then(|video| video.key.as_deref())
        .unwrap_or_default();
    format!("{YOUTUBE_WATCH_URL}{key}")
}
