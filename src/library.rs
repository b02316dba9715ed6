//! Local side of the comparison: scanning an album directory into tracks
//! and guessing what the directory is called on MusicBrainz.

mod guess;
mod model;
mod scan;

pub use guess::{album_dir_name, guess_artist_and_album};
pub use model::{LocalAlbum, LocalTrack};
pub use scan::scan;

#[cfg(test)]
mod tests;
