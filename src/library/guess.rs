use std::path::Path;

/// Split an album folder name of the form `Artist - Album`.
///
/// The split happens at the first `-`, with surrounding whitespace trimmed. Names
/// without a dash yield no artist and the whole (trimmed) name as the album; an
/// empty artist part also counts as no artist.
pub fn guess_artist_and_album(dir_name: &str) -> (Option<String>, String) {
    match dir_name.split_once('-') {
        Some((artist, album)) => {
            let artist = artist.trim();
            let artist = (!artist.is_empty()).then(|| artist.to_string());
            (artist, album.trim().to_string())
        }
        None => (None, dir_name.trim().to_string()),
    }
}

/// Last path component of `root`, ignoring trailing separators and `.` components.
pub fn album_dir_name(root: &Path) -> String {
    root.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default()
}
