use crate::library::LocalTrack;

/// Sort position for tracks whose number is missing or not numeric; above any `u32`.
pub const TRACK_NUMBER_SENTINEL: u64 = u64::MAX;

pub fn track_sort_key(track: &LocalTrack) -> (&str, u64) {
    let number = track
        .track_number
        .as_deref()
        .and_then(|n| n.split('/').next())
        .and_then(|n| n.trim().parse::<u32>().ok())
        .map_or(TRACK_NUMBER_SENTINEL, u64::from);
    (track.relative_subdirectory.as_str(), number)
}

/// Local tracks ordered by subdirectory, then track number; stable for equal keys.
pub fn sort_local_tracks(tracks: &[LocalTrack]) -> Vec<&LocalTrack> {
    let mut sorted: Vec<&LocalTrack> = tracks.iter().collect();
    sorted.sort_by(|a, b| track_sort_key(a).cmp(&track_sort_key(b)));
    sorted
}
