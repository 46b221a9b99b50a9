use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{AlbumsPage, Artist, SearchResponse, SeveralArtistsResponse},
    utils, warning,
};

/// Searches for an artist by name and returns the best match.
///
/// Runs a `type=artist` search with `limit=1`; Spotify orders search results
/// by relevance, so the first item is the best match the API has. Returns
/// `Ok(None)` when the search comes back empty.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `name` - Artist name as the user typed it; percent-encoded here
///
/// # Retry Logic
///
/// Retries automatically on 502 Bad Gateway after a 10-second delay and on
/// 429 Too Many Requests according to the `Retry-After` header. Other errors
/// are propagated immediately.
///
/// # Example
///
/// ```
/// let artist = search_artist(&token, "MGK").await?;
/// if let Some(artist) = artist {
///     println!("Best match: {} ({})", artist.name, artist.id);
/// }
/// ```
pub async fn search_artist(token: &str, name: &str) -> Result<Option<Artist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/search?q={query}&type=artist&limit=1",
        uri = &config::spotify_apiurl(),
        query = urlencode(name)
    );

    let res = request_json::<SearchResponse>(token, &api_url).await?;
    Ok(res.artists.items.into_iter().next())
}

/// Retrieves full artist objects for a batch of artist ids.
///
/// Uses the `/artists?ids=` endpoint which accepts up to 50 ids per request.
/// Spotify returns `null` slots for unknown ids; those are dropped from the
/// result.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Artist ids to look up, at most 50
pub async fn get_several_artists(
    token: &str,
    ids: &[String],
) -> Result<Vec<Artist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = utils::join_ids(ids.iter().map(|s| s.as_str()))
    );

    let res = request_json::<SeveralArtistsResponse>(token, &api_url).await?;
    Ok(res.artists.into_iter().flatten().collect())
}

/// Retrieves one page of an artist's discography.
///
/// Fetches albums and singles (`include_groups=album,single`) with
/// offset-based pagination. The caller walks pages until a page comes back
/// shorter than `limit` or `next` is absent.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify id of the artist
/// * `limit` - Page size (1-50)
/// * `offset` - Index of the first album to return
///
/// # Example
///
/// ```
/// let mut offset = 0;
/// loop {
///     let page = get_artist_albums(&token, &artist_id, 50, offset).await?;
///     let fetched = page.items.len() as u32;
///     // consume page.items ...
///     if fetched < 50 {
///         break;
///     }
///     offset += fetched;
/// }
/// ```
pub async fn get_artist_albums(
    token: &str,
    artist_id: &str,
    limit: u32,
    offset: u32,
) -> Result<AlbumsPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/albums?include_groups=album,single&limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        limit = limit,
        offset = offset
    );

    request_json::<AlbumsPage>(token, &api_url).await
}

/// Sends a GET request and decodes the JSON body, applying the crate-wide
/// retry rules for 502 and 429 responses.
pub(crate) async fn request_json<T: serde::de::DeserializeOwned>(
    token: &str,
    api_url: &str,
) -> Result<T, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = resp
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);
                    if retry_after <= 120 {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                    warning!(
                        "Retry-After has reached an abnormal high of {} seconds. Try again tomorrow.",
                        retry_after
                    );
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<T>().await;
    }
}

/// Minimal percent-encoding for search query strings.
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
