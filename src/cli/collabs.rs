use std::collections::HashSet;

use tabled::Table;

use crate::{error, info, success, types::CollabTableRow, utils, warning};

pub async fn collabs(artist_name: String) {
    let mut graph = super::load_graph().await;

    let artist = match graph.artist_by_name(&artist_name).await {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            warning!("Could not find artist: {}", artist_name);
            return;
        }
        Err(e) => error!("Artist search failed: {}", e),
    };

    info!("Finding collaborators for {}...", artist.name);

    let collaborations = match graph.collaborators(&artist).await {
        Ok(collabs) => collabs,
        Err(e) => error!("Failed to gather collaborations: {}", e),
    };

    if collaborations.is_empty() {
        warning!("No collaborations found for {}.", artist.name);
        return;
    }

    let collaborator_count = collaborations
        .iter()
        .map(|c| c.artist.id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut rows: Vec<CollabTableRow> = collaborations
        .iter()
        .map(|c| CollabTableRow {
            artist: c.artist.name.clone(),
            track: c.track_name.clone(),
            album: c.album_name.clone(),
            released: c
                .release_date
                .map(|d| d.to_string())
                .unwrap_or_else(String::new),
        })
        .collect();

    utils::sort_collab_rows(&mut rows);

    let table = Table::new(rows);
    println!("{}", table);

    success!(
        "Found {} collaborators on {} tracks for {}.",
        collaborator_count,
        collaborations.len(),
        artist.name
    );
}
