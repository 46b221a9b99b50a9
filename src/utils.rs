use std::{cmp::Ordering, collections::HashSet};

use chrono::NaiveDate;

use crate::types::{CollabTableRow, Collaboration};

/// Parses a release date string from the Spotify API.
///
/// Spotify reports dates at three precisions depending on
/// `release_date_precision`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. Missing
/// components default to the first month/day. Anything else yields `None`.
pub fn parse_release_date(date_str: &str) -> Option<NaiveDate> {
    match date_str.len() {
        4 => {
            let year: i32 = date_str.parse().ok()?;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        7 => {
            let (year, month) = date_str.split_once('-')?;
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        10 => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Removes duplicate collaborations, keeping the first occurrence of each
/// (collaborator id, track uri) pair.
pub fn dedupe_collaborations(collabs: &mut Vec<Collaboration>) {
    let mut seen = HashSet::new();
    collabs.retain(|c| seen.insert((c.artist.id.clone(), c.track_uri.clone())));
}

/// Sorts collaboration table rows by collaborator name ascending, then by
/// release date descending within a collaborator.
pub fn sort_collab_rows(rows: &mut Vec<CollabTableRow>) {
    rows.sort_by(|a, b| match a.artist.cmp(&b.artist) {
        Ordering::Equal => b.released.cmp(&a.released),
        other => other,
    });
}

/// Joins entity ids into the comma-separated list batch endpoints expect.
pub fn join_ids<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().collect::<Vec<_>>().join(",")
}
