//! # CLI Module
//!
//! User-facing command implementations. Each command wires the management
//! layer (token, response cache) to the graph layer and presents results with
//! the crate's colored output macros and `tabled` tables.
//!
//! ## Commands
//!
//! - [`auth`] - client credentials exchange, persists the token
//! - [`collabs`] - lists every collaborator of an artist as a table
//! - [`path`] - finds the shortest collaboration chain between two artists
//! - [`cache`] - shows or clears the on-disk response cache
//!
//! ## Error Handling Philosophy
//!
//! Unrecoverable situations (missing token, credential failures) terminate
//! through the `error!` macro with a hint on how to recover, typically
//! `spotipath auth`. Empty results (unknown artist, no path) are reported
//! with `warning!` and exit cleanly.

mod auth;
mod cache;
mod collabs;
mod path;

pub use auth::auth;
pub use cache::cache;
pub use collabs::collabs;
pub use path::path;

use crate::{
    error,
    graph::SpotifyGraph,
    management::{ResponseCache, TokenManager},
};

/// Builds the live graph from the persisted token and the default cache
/// location. Terminates with a hint when no token has been stored yet.
async fn load_graph() -> SpotifyGraph {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotipath auth\n Error: {}",
                e
            );
        }
    };

    let cache = ResponseCache::new(ResponseCache::default_dir(), None);
    SpotifyGraph::new(token_mgr, cache)
}
