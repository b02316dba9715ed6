use super::assemble::*;
use super::order::*;
use crate::diff::RenderLayout;
use crate::library::{LocalAlbum, LocalTrack};
use crate::remote::{
    ArtistCredit, Medium, RemoteRelease, RemoteReleaseGroup, RemoteTrack, UrlRelation,
};

fn local(subdir: &str, file: &str, number: Option<&str>, title: &str) -> LocalTrack {
    LocalTrack {
        relative_subdirectory: subdir.into(),
        filename: file.into(),
        title: title.into(),
        artist: Some("A Plus D".into()),
        track_number: number.map(str::to_string),
    }
}

fn remote_track(pos: &str, title: &str, rec: Option<&str>) -> RemoteTrack {
    RemoteTrack {
        position: Some(pos.into()),
        recording_title: title.into(),
        recording_id: rec.map(str::to_string),
        artist_credit_phrase: Some("A Plus D".into()),
    }
}

fn remote(media: Vec<Vec<RemoteTrack>>) -> RemoteRelease {
    RemoteRelease {
        id: "r1".into(),
        title: "Best".into(),
        artist_credits: vec![ArtistCredit::CreditedArtist {
            name: "A Plus D".into(),
        }],
        release_group: Some(RemoteReleaseGroup {
            id: "g1".into(),
            title: "Best".into(),
            primary_type: Some("Album".into()),
        }),
        media: media.into_iter().map(|tracks| Medium { tracks }).collect(),
        url_relations: vec![UrlRelation {
            relation_type: "discogs".into(),
            target: "https://d.test/1".into(),
        }],
    }
}

fn album(tracks: Vec<LocalTrack>) -> LocalAlbum {
    LocalAlbum {
        guessed_artist: Some("A Plus D".into()),
        guessed_album: "Best".into(),
        tracks,
    }
}

fn options(left_width: usize) -> ReportOptions {
    ReportOptions {
        layout: RenderLayout {
            left_width,
            separator_width: 10,
        },
        site_base_url: "https://mb.test/".into(),
    }
}

#[test]
fn sort_orders_by_subdirectory_then_number_with_untagged_last() {
    let tracks = vec![
        local("Bonus", "b1.mp3", Some("1"), "B1"),
        local("", "x.mp3", None, "X"),
        local("", "two.mp3", Some("2"), "Two"),
        local("", "junk.mp3", Some("side A"), "Junk"),
        local("", "ten.mp3", Some("10"), "Ten"),
        local("", "one.mp3", Some("1/12"), "One"),
    ];
    let titles: Vec<&str> = sort_local_tracks(&tracks)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["One", "Two", "Ten", "X", "Junk", "B1"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let tracks = vec![
        local("", "c.mp3", Some("3"), "first three"),
        local("", "a.mp3", Some("1"), "one"),
        local("", "d.mp3", Some("3"), "second three"),
        local("", "e.mp3", None, "untagged a"),
        local("", "f.mp3", Some("n/a"), "untagged b"),
    ];
    let titles: Vec<&str> = sort_local_tracks(&tracks)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["one", "first three", "second three", "untagged a", "untagged b"]
    );
}

#[test]
fn sentinel_sorts_after_large_real_track_numbers() {
    let big = local("", "big.mp3", Some("99999"), "big");
    let none = local("", "none.mp3", None, "none");
    assert!(track_sort_key(&big) < track_sort_key(&none));
    assert_eq!(track_sort_key(&none).1, TRACK_NUMBER_SENTINEL);
}

#[test]
fn release_section_unifies_matching_fields_and_lists_relations() {
    let lines = release_section(&album(vec![]), &remote(vec![]), &options(42));
    assert_eq!(
        lines,
        vec![
            "          == Artist: A Plus D".to_string(),
            "          == Album:  Best".to_string(),
            "(subdir logic not shown at release-level)  | MB Release URI: https://mb.test/release/r1"
                .to_string(),
            format!("{} |  - discogs: https://d.test/1", " ".repeat(42)),
        ]
    );
}

#[test]
fn release_section_uses_placeholders_for_unknowns() {
    let local_album = LocalAlbum {
        guessed_artist: None,
        guessed_album: String::new(),
        tracks: vec![],
    };
    let mut release = remote(vec![]);
    release.artist_credits.clear();
    release.title.clear();
    release.id.clear();
    release.url_relations.clear();

    let lines = release_section(&local_album, &release, &options(30));
    assert_eq!(
        lines,
        vec![
            format!("{:<30} | Artist: (Unknown Artist)", "Artist: Unknown Local Artist"),
            format!("{:<30} | Album:  Unknown MB Album", "Album:  Unknown Local Album"),
            format!("{:<30} | ", "(subdir logic not shown at rel"),
        ]
    );
}

#[test]
fn track_section_pairs_by_position_and_pads_exhausted_side() {
    let local_album = album(vec![
        local("", "02.mp3", Some("2"), "Second"),
        local("", "01.mp3", Some("1"), "First"),
        local("Bonus", "b.mp3", None, "Extra"),
    ]);
    let release = remote(vec![
        vec![remote_track("1", "First", Some("rec-1"))],
        vec![remote_track("1", "Second", None)],
    ]);

    let lines = track_section(&local_album, &release, &options(20));
    let rule = "-".repeat(10);

    assert_eq!(
        lines,
        vec![
            // local 01 vs medium 1 track 1
            format!("{:<20} | URI:     https://mb.test/recording/rec-1", "File:    01.mp3"),
            "          == Track#:  1".to_string(),
            "          == Title:   First".to_string(),
            "          == Artist:  A Plus D".to_string(),
            rule.clone(),
            // local 02 vs medium 2 track 1: positional, not by number
            format!("{:<20} | URI:     (no MB URI)", "File:    02.mp3"),
            format!("{:<20} | Track#:  1", "Track#:  2"),
            "          == Title:   Second".to_string(),
            "          == Artist:  A Plus D".to_string(),
            rule.clone(),
            // local bonus track has no remote counterpart
            format!("{:<20} | (No MB track)", "File:    Bonus/b.mp3"),
            format!("{:<20} | ", "Track#:  "),
            format!("{:<20} | ", "Title:   Extra"),
            format!("{:<20} | ", "Artist:  A Plus D"),
            rule,
        ]
    );
}

#[test]
fn track_section_shows_missing_local_tracks() {
    let release = remote(vec![vec![remote_track("1", "Only", Some("r"))]]);
    let lines = track_section(&album(vec![]), &release, &options(20));
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        format!("{:<20} | URI:     https://mb.test/recording/r", "(No local track)")
    );
    assert_eq!(lines[1], format!("{:<20} | Track#:  1", ""));
}

#[test]
fn build_report_concatenates_banners_and_sections() {
    let local_album = album(vec![local("", "01.mp3", Some("1"), "First")]);
    let release = remote(vec![vec![remote_track("1", "First", Some("rec-1"))]]);
    let opts = options(42);

    let report = build_report(&local_album, &release, &opts);
    let lines: Vec<&str> = report.lines().collect();
    let banner = "=".repeat(10);

    assert_eq!(lines[0], banner);
    assert_eq!(lines[1], "RELEASE-LEVEL COMPARISON");
    assert_eq!(lines[2], banner);
    assert_eq!(lines[3], "          == Artist: A Plus D");
    // 4 release rows, a blank line, then the second banner
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], banner);
    assert_eq!(lines[9], "TRACK-BY-TRACK COMPARISON");
    assert_eq!(lines[10], banner);
    assert_eq!(lines.len(), 11 + 5);
    assert_eq!(*lines.last().unwrap(), "-".repeat(10));
    assert!(!report.ends_with('\n'));
}
