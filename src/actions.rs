//! Follow-up edits on MusicBrainz that the report may suggest.
//!
//! Nothing here changes the catalog: an action is only ever an editor page
//! opened in the browser after the user confirms it.

mod launch;
mod offer;

pub use launch::*;
pub use offer::*;
