//! # Spotify Integration Module
//!
//! Thin async interface to the Spotify Web API endpoints the path finder
//! consumes. One free function per endpoint, typed serde responses, and the
//! error-surfacing rules shared across the crate:
//!
//! - **502 Bad Gateway** - wait 10 seconds and retry the request
//! - **429 Too Many Requests** - honor the `Retry-After` header when it is
//!   120 seconds or less, otherwise warn and give up on the request
//! - anything else propagates as `reqwest::Error` via `error_for_status`
//!
//! ## Submodules
//!
//! - [`auth`] - client credentials token exchange. The tool only reads public
//!   catalog data, so no user authorization or callback server is involved;
//!   a Basic-authenticated `POST /api/token` is the whole flow.
//! - [`artists`] - artist search, batch artist lookup and discography pages
//! - [`albums`] - batch album details (with embedded track pages) and album
//!   track pages
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials exchange
//! - `GET /search?type=artist` - resolve an artist name to an id
//! - `GET /artists?ids=` - batch artist metadata (up to 50 ids)
//! - `GET /artists/{id}/albums` - discography pages, albums and singles
//! - `GET /albums?ids=` - batch album details (up to 20 ids)
//! - `GET /albums/{id}/tracks` - track pages for long albums
//!
//! Callers are expected to stay inside the documented batch limits; the
//! functions here do not re-chunk oversized id lists.
//!
//! ## Caching
//!
//! Nothing in this module caches. The [`crate::graph`] layer decides which
//! responses are worth memoizing and stores them through
//! [`crate::management::ResponseCache`].

pub mod albums;
pub mod artists;
pub mod auth;
