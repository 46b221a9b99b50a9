use crate::{
    config,
    types::{SeveralAlbumsResponse, TracksPage},
    utils,
};

use super::artists::request_json;

/// Maximum number of album ids the `/albums` endpoint accepts per request.
pub const ALBUM_BATCH_LIMIT: usize = 20;

/// Retrieves detailed information for a batch of albums in a single request.
///
/// The detailed album objects embed the first page of their track listings
/// (up to 50 tracks), which is what makes the collaborator expansion cheap:
/// one request yields the co-credits of twenty albums. Albums with more
/// tracks expose a `next` link on their track page and are completed via
/// [`get_album_tracks`].
///
/// Spotify returns `null` slots for ids it cannot resolve; callers must skip
/// those.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `album_ids` - Album ids to fetch, at most [`ALBUM_BATCH_LIMIT`]
///
/// # Example
///
/// ```
/// for chunk in album_ids.chunks(ALBUM_BATCH_LIMIT) {
///     let detail = get_several_albums(&token, chunk).await?;
///     for album in detail.albums.into_iter().flatten() {
///         println!("{} has {} tracks", album.name, album.tracks.items.len());
///     }
/// }
/// ```
pub async fn get_several_albums(
    token: &str,
    album_ids: &[String],
) -> Result<SeveralAlbumsResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/albums?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = utils::join_ids(album_ids.iter().map(|s| s.as_str()))
    );

    request_json::<SeveralAlbumsResponse>(token, &api_url).await
}

/// Retrieves one page of an album's track listing.
///
/// Only needed for albums whose embedded track page in the batch response is
/// incomplete. Offset-based pagination, page size 1-50.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `album_id` - Spotify id of the album
/// * `limit` - Page size (1-50)
/// * `offset` - Index of the first track to return
pub async fn get_album_tracks(
    token: &str,
    album_id: &str,
    limit: u32,
    offset: u32,
) -> Result<TracksPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        id = album_id,
        limit = limit,
        offset = offset
    );

    request_json::<TracksPage>(token, &api_url).await
}
