use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    Res, info,
    types::{Artist, ArtistPath, Collaboration, PathStep},
};

/// Safety valve on graph size: the search gives up after visiting this many
/// artists per allowed hop, independent of the depth bound.
const VISITED_PER_HOP: usize = 100;

/// Source of collaboration edges for the path finder.
///
/// [`super::SpotifyGraph`] is the production implementation; tests provide an
/// in-memory fixture graph.
#[allow(async_fn_in_trait)]
pub trait CollabSource {
    /// Resolves an artist by display name, or `None` if unknown.
    async fn artist_by_name(&mut self, name: &str) -> Res<Option<Artist>>;

    /// Returns all collaborators of the artist with their connecting tracks.
    async fn collaborators(&mut self, artist: &Artist) -> Res<Vec<Collaboration>>;

    /// Whether the collaborator set of this artist can be produced without
    /// network calls. Drives the cached-first frontier ordering.
    fn is_cached(&self, artist_id: &str) -> bool;
}

/// Breadth-first search for the shortest collaboration chain between two
/// artists.
///
/// The graph is unweighted, so plain BFS yields a shortest path. The only
/// twist is expansion cost: visiting an uncached artist means a full
/// discography walk against the API, so within each expansion the
/// collaborators that are already cached are checked against the target and
/// enqueued first.
pub struct PathFinder<S: CollabSource> {
    source: S,
}

impl<S: CollabSource> PathFinder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Finds the shortest chain of collaborations from `start_name` to
    /// `end_name`, both resolved by search.
    ///
    /// `max_depth` bounds the number of collaboration edges on the returned
    /// path: artists already `max_depth` hops out are not expanded further.
    /// Returns `None` when either artist cannot be resolved or no chain
    /// exists within the bound.
    pub async fn find_path(
        &mut self,
        start_name: &str,
        end_name: &str,
        max_depth: u32,
    ) -> Res<Option<ArtistPath>> {
        let Some(start) = self.source.artist_by_name(start_name).await? else {
            return Ok(None);
        };
        let Some(end) = self.source.artist_by_name(end_name).await? else {
            return Ok(None);
        };

        if start.id == end.id {
            return Ok(Some(ArtistPath {
                steps: vec![PathStep {
                    artist: start,
                    via_track: None,
                }],
            }));
        }

        info!("Searching for path from {} to {}...", start.name, end.name);

        let visited_cap = max_depth as usize * VISITED_PER_HOP;
        let mut visited: HashSet<String> = HashSet::from([start.id.clone()]);
        let mut paths: HashMap<String, Vec<PathStep>> = HashMap::new();
        paths.insert(
            start.id.clone(),
            vec![PathStep {
                artist: start.clone(),
                via_track: None,
            }],
        );

        let mut queue: VecDeque<Artist> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if visited.len() > visited_cap {
                break;
            }

            let current_path = match paths.get(&current.id) {
                Some(path) => path.clone(),
                None => continue,
            };
            let depth = current_path.len().saturating_sub(1);
            if depth >= max_depth as usize {
                continue;
            }

            let collaborations = self.source.collaborators(&current).await?;

            let (cached, uncached): (Vec<Collaboration>, Vec<Collaboration>) = collaborations
                .into_iter()
                .partition(|c| self.source.is_cached(&c.artist.id));
            let (cached_count, uncached_count) = (cached.len(), uncached.len());

            // cached collaborators first: their own expansion is free
            for collab in cached.into_iter().chain(uncached) {
                if visited.contains(&collab.artist.id) {
                    continue;
                }

                let mut new_path = current_path.clone();
                new_path.push(PathStep {
                    artist: collab.artist.clone(),
                    via_track: Some(collab.track_name.clone()),
                });

                if collab.artist.id == end.id {
                    return Ok(Some(ArtistPath { steps: new_path }));
                }

                visited.insert(collab.artist.id.clone());
                paths.insert(collab.artist.id.clone(), new_path);
                queue.push_back(collab.artist);
            }

            info!(
                "Checked {} artists... ({} cached, {} uncached)",
                visited.len(),
                cached_count,
                uncached_count
            );
        }

        Ok(None)
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
