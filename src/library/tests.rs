use super::guess::{album_dir_name, guess_artist_and_album};
use super::model::LocalTrack;
use std::path::Path;

#[test]
fn guess_splits_artist_and_album_on_first_dash() {
    assert_eq!(
        guess_artist_and_album("A Plus D - Best of Bootie Mashup 2024"),
        (
            Some("A Plus D".to_string()),
            "Best of Bootie Mashup 2024".to_string()
        )
    );
    assert_eq!(
        guess_artist_and_album("Jay-Z - The Blueprint"),
        (Some("Jay".to_string()), "Z - The Blueprint".to_string())
    );
    assert_eq!(
        guess_artist_and_album("Artist-Album"),
        (Some("Artist".to_string()), "Album".to_string())
    );
}

#[test]
fn guess_without_dash_is_album_only() {
    assert_eq!(
        guess_artist_and_album("  Greatest Hits  "),
        (None, "Greatest Hits".to_string())
    );
    assert_eq!(
        guess_artist_and_album(" - Untitled"),
        (None, "Untitled".to_string())
    );
}

#[test]
fn album_dir_name_ignores_trailing_separator_and_dot() {
    assert_eq!(album_dir_name(Path::new("/music/Artist - Album/")), "Artist - Album");
    assert_eq!(album_dir_name(Path::new("/music/Artist - Album/.")), "Artist - Album");
    assert_eq!(album_dir_name(Path::new("Album")), "Album");
}

#[test]
fn display_path_prefixes_subdirectory_only_when_present() {
    let mut t = LocalTrack {
        relative_subdirectory: String::new(),
        filename: "01 Intro.mp3".into(),
        title: "Intro".into(),
        artist: None,
        track_number: Some("1".into()),
    };
    assert_eq!(t.display_path(), "01 Intro.mp3");
    t.relative_subdirectory = "CD2".into();
    assert_eq!(t.display_path(), "CD2/01 Intro.mp3");
}
