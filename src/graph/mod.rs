//! # Collaboration Graph Module
//!
//! The collaboration graph is never materialized as a whole; it is discovered
//! on demand. An artist node's neighbors are the artists co-credited on any
//! track of any of their albums or singles, and expanding a node means walking
//! that discography through the API.
//!
//! - [`collaborators`] - [`SpotifyGraph`](collaborators::SpotifyGraph), the
//!   lazy neighbor expansion backed by the Spotify client and the response
//!   cache. Expanding an artist once is expensive (one discography walk plus
//!   batched album lookups); every later expansion is a single cache read.
//! - [`path`] - [`PathFinder`](path::PathFinder), breadth-first search over
//!   the lazily-expanded graph. Generic over the [`CollabSource`](path::CollabSource)
//!   trait so tests can drive it with an in-memory fixture graph instead of
//!   the live API.

pub mod collaborators;
pub mod path;

pub use collaborators::SpotifyGraph;
pub use path::{CollabSource, PathFinder};
