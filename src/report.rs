//! Text report comparing a local album with a MusicBrainz release, release
//! fields first, then track by track.

mod assemble;
mod order;

pub use assemble::*;

#[cfg(test)]
mod tests;
