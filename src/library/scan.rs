use std::path::Path;

use lofty::prelude::{ItemKey, TaggedFileExt};
use lofty::tag::Tag;
use log::debug;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::LocalTrack;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// `parent` of `rel` joined with `/`, or empty when the file sits at the root.
fn relative_subdirectory(rel: &Path) -> String {
    rel.parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

fn non_empty(v: &str) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Track number as tagged, cut at the `/` of a `"7/12"` style value.
/// Non-numeric numbers such as `"A1"` are kept.
fn track_number_from_raw(raw: &str) -> Option<String> {
    raw.split('/').next().and_then(non_empty)
}

/// Title, artist and track number carried by `tag`, each `None` when blank.
fn tag_fields(tag: &Tag) -> (Option<String>, Option<String>, Option<String>) {
    let title = tag.get_string(&ItemKey::TrackTitle).and_then(non_empty);
    let artist = tag.get_string(&ItemKey::TrackArtist).and_then(non_empty);
    let track_number = tag
        .get_string(&ItemKey::TrackNumber)
        .and_then(track_number_from_raw);
    (title, artist, track_number)
}

/// Walk `root` recursively and build one `LocalTrack` per audio file.
///
/// Files are visited in file-name order within each directory. Unreadable or
/// untagged files are still listed, titled after their filename stem.
pub fn scan(root: &Path, settings: &LibrarySettings) -> Vec<LocalTrack> {
    let mut tracks: Vec<LocalTrack> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let default_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        let mut title = default_title;
        let mut artist: Option<String> = None;
        let mut track_number: Option<String> = None;

        match lofty::read_from_path(path) {
            Ok(tagged) => {
                if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                    let (tag_title, tag_artist, tag_number) = tag_fields(tag);
                    if let Some(v) = tag_title {
                        title = v;
                    }
                    artist = tag_artist;
                    track_number = tag_number;
                }
            }
            Err(e) => debug!("no readable tags in {}: {e}", path.display()),
        }

        tracks.push(LocalTrack {
            relative_subdirectory: relative_subdirectory(rel),
            filename,
            title,
            artist,
            track_number,
        });
    }

    tracks
}
