use crate::diff::{RenderLayout, align, render};
use crate::library::{LocalAlbum, LocalTrack};
use crate::remote::{RemoteRelease, RemoteTrack};

use super::order::sort_local_tracks;

const RELEASE_HEADING: &str = "RELEASE-LEVEL COMPARISON";
const TRACK_HEADING: &str = "TRACK-BY-TRACK COMPARISON";
const RELEASE_NOTE: &str = "(subdir logic not shown at release-level)";
const NO_LOCAL_TRACK: &str = "(No local track)";
const NO_REMOTE_TRACK: &str = "(No MB track)";

/// Layout plus the site root used for release and recording links.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub layout: RenderLayout,
    pub site_base_url: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            layout: RenderLayout::default(),
            site_base_url: "https://musicbrainz.org".to_string(),
        }
    }
}

impl ReportOptions {
    fn site(&self) -> &str {
        self.site_base_url.trim_end_matches('/')
    }
}

fn local_release_lines(local: &LocalAlbum) -> Vec<String> {
    let artist = local
        .guessed_artist
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or("Unknown Local Artist");
    let album = if local.guessed_album.is_empty() {
        "Unknown Local Album"
    } else {
        local.guessed_album.as_str()
    };
    vec![
        format!("Artist: {artist}"),
        format!("Album:  {album}"),
        RELEASE_NOTE.to_string(),
    ]
}

fn remote_release_lines(remote: &RemoteRelease, options: &ReportOptions) -> Vec<String> {
    let title = if remote.title.is_empty() {
        "Unknown MB Album"
    } else {
        remote.title.as_str()
    };
    let mut lines = vec![
        format!("Artist: {}", remote.artist_display()),
        format!("Album:  {title}"),
    ];
    if !remote.id.is_empty() {
        lines.push(format!(
            "MB Release URI: {}/release/{}",
            options.site(),
            remote.id
        ));
    }
    for rel in &remote.url_relations {
        lines.push(format!(" - {}: {}", rel.relation_type, rel.target));
    }
    lines
}

fn local_track_block(track: Option<&LocalTrack>) -> Vec<String> {
    match track {
        Some(t) => vec![
            format!("File:    {}", t.display_path()),
            format!("Track#:  {}", t.track_number.as_deref().unwrap_or("")),
            format!("Title:   {}", t.title),
            format!("Artist:  {}", t.artist.as_deref().unwrap_or("")),
        ],
        None => placeholder_block(NO_LOCAL_TRACK),
    }
}

fn remote_track_block(track: Option<&RemoteTrack>, options: &ReportOptions) -> Vec<String> {
    match track {
        Some(t) => {
            let uri = match &t.recording_id {
                Some(id) => format!("{}/recording/{id}", options.site()),
                None => "(no MB URI)".to_string(),
            };
            vec![
                format!("URI:     {uri}"),
                format!("Track#:  {}", t.position.as_deref().unwrap_or("")),
                format!("Title:   {}", t.recording_title),
                format!("Artist:  {}", t.artist_credit_phrase.as_deref().unwrap_or("")),
            ]
        }
        None => placeholder_block(NO_REMOTE_TRACK),
    }
}

fn placeholder_block(label: &str) -> Vec<String> {
    vec![label.to_string(), String::new(), String::new(), String::new()]
}

/// Release-level rows: guessed artist/album against the release's credits,
/// title, permalink and URL relations.
pub fn release_section(
    local: &LocalAlbum,
    remote: &RemoteRelease,
    options: &ReportOptions,
) -> Vec<String> {
    let left = local_release_lines(local);
    let right = remote_release_lines(remote, options);
    render(&align(&left, &right, true), &options.layout)
}

/// Track rows: sorted local tracks against the release's tracks in medium
/// order, paired by position, each pair followed by a separator rule.
pub fn track_section(
    local: &LocalAlbum,
    remote: &RemoteRelease,
    options: &ReportOptions,
) -> Vec<String> {
    let local_tracks = sort_local_tracks(&local.tracks);
    let remote_tracks: Vec<&RemoteTrack> = remote.flattened_tracks().collect();
    let rule = "-".repeat(options.layout.separator_width);

    let n = local_tracks.len().max(remote_tracks.len());
    let mut lines = Vec::new();
    for i in 0..n {
        let left = local_track_block(local_tracks.get(i).copied());
        let right = remote_track_block(remote_tracks.get(i).copied(), options);
        lines.extend(render(&align(&left, &right, true), &options.layout));
        lines.push(rule.clone());
    }
    lines
}

/// Full side-by-side report, newline-joined.
pub fn build_report(local: &LocalAlbum, remote: &RemoteRelease, options: &ReportOptions) -> String {
    let banner = "=".repeat(options.layout.separator_width);

    let mut out: Vec<String> = vec![banner.clone(), RELEASE_HEADING.to_string(), banner.clone()];
    out.extend(release_section(local, remote, options));
    out.push(String::new());
    out.push(banner.clone());
    out.push(TRACK_HEADING.to_string());
    out.push(banner);
    out.extend(track_section(local, remote, options));

    out.join("\n")
}
