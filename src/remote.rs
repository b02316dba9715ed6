//! Remote side of the comparison: MusicBrainz release records and the
//! blocking web-service client that fetches them.

mod client;
mod error;
mod model;

pub use client::MusicBrainzClient;
pub use error::RemoteError;
pub use model::*;

/// Search and lookup operations the matching engine needs from a catalog.
pub trait ReleaseSource {
    /// Search releases by title, narrowed by artist when one is known.
    fn search_releases(
        &self,
        artist: Option<&str>,
        album: &str,
        limit: usize,
    ) -> Result<Vec<ReleaseHit>, RemoteError>;

    /// Fetch one release with artist credits, recordings, release group and URL relations.
    fn release_by_id(&self, id: &str) -> Result<RemoteRelease, RemoteError>;

    /// Id of the artist named exactly `name`, if the catalog knows one.
    fn find_artist_id(&self, _name: &str) -> Result<Option<String>, RemoteError> {
        Ok(None)
    }
}
