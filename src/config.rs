//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive scanning,
//! MusicBrainz lookups and report layout, plus helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;
