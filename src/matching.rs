//! Candidate matching: find the MusicBrainz release whose track count is
//! closest to the local album, asking the user when release groups tie.

mod engine;
mod prompt;

pub use engine::*;
pub use prompt::*;
