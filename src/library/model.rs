/// One audio file found under the album directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTrack {
    /// Directory relative to the album root, `/`-separated; empty for the root itself.
    pub relative_subdirectory: String,
    pub filename: String,
    /// Never empty: falls back to the filename stem when the tags carry no title.
    pub title: String,
    pub artist: Option<String>,
    /// Raw track number as tagged. May be non-numeric.
    pub track_number: Option<String>,
}

impl LocalTrack {
    /// `subdir/filename`, or just the filename for tracks at the album root.
    pub fn display_path(&self) -> String {
        if self.relative_subdirectory.is_empty() {
            self.filename.clone()
        } else {
            format!("{}/{}", self.relative_subdirectory, self.filename)
        }
    }
}

/// The local side of a comparison: what the directory name suggests plus what was scanned.
#[derive(Debug, Clone)]
pub struct LocalAlbum {
    pub guessed_artist: Option<String>,
    pub guessed_album: String,
    pub tracks: Vec<LocalTrack>,
}
