use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use serde::de::DeserializeOwned;

use crate::config::MusicBrainzSettings;

use super::ReleaseSource;
use super::error::RemoteError;
use super::model::{ArtistSearchResponse, ReleaseHit, RemoteRelease, SearchResponse, WireRelease};

/// Sub-queries requested with every release lookup.
const RELEASE_INCLUDES: &[&str] = &["artist-credits", "recordings", "release-groups", "url-rels"];

/// Blocking MusicBrainz client.
///
/// Requests are spaced by at least `request_interval` to stay within the
/// service's rate limit.
pub struct MusicBrainzClient {
    agent: ureq::Agent,
    api_base_url: String,
    user_agent: String,
    request_interval: Duration,
    last_request: Cell<Option<Instant>>,
}

impl MusicBrainzClient {
    pub fn new(settings: &MusicBrainzSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.connect_timeout_secs))
            .timeout_read(Duration::from_secs(settings.read_timeout_secs))
            .build();

        Self {
            agent,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            user_agent: settings.user_agent.clone(),
            request_interval: Duration::from_millis(settings.request_interval_ms),
            last_request: Cell::new(None),
        }
    }

    /// Sleep until `request_interval` has passed since the previous request.
    pub(super) fn wait_for_slot(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < self.request_interval {
                let wait = self.request_interval - elapsed;
                debug!("rate limiting: waiting {wait:?}");
                thread::sleep(wait);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        self.wait_for_slot();
        debug!("GET {url}");

        let response = self
            .agent
            .get(url)
            .set("User-Agent", &self.user_agent)
            .set("Accept", "application/json")
            .call()
            .map_err(|error| match error {
                ureq::Error::Status(status, _) => RemoteError::Http {
                    status,
                    url: url.to_string(),
                },
                ureq::Error::Transport(transport) => RemoteError::Transport {
                    url: url.to_string(),
                    message: transport.to_string(),
                },
            })?;

        let body = response.into_string().map_err(|source| RemoteError::Io {
            url: url.to_string(),
            source,
        })?;
        decode(url, &body)
    }
}

pub(super) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, RemoteError> {
    serde_json::from_str(body).map_err(|source| RemoteError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Quote a Lucene term, escaping the characters that would end the phrase.
fn quote_term(term: &str) -> String {
    let escaped = term.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Lucene query for the release search endpoint.
pub(super) fn search_query(artist: Option<&str>, album: &str) -> String {
    let mut query = format!("release:{}", quote_term(album));
    if let Some(artist) = artist.map(str::trim).filter(|a| !a.is_empty()) {
        query.push_str(" AND artist:");
        query.push_str(&quote_term(artist));
    }
    query
}

pub(super) fn search_url(base: &str, artist: Option<&str>, album: &str, limit: usize) -> String {
    format!(
        "{}/release?query={}&limit={}&fmt=json",
        base,
        urlencoding::encode(&search_query(artist, album)),
        limit
    )
}

pub(super) fn artist_search_url(base: &str, name: &str) -> String {
    format!(
        "{}/artist?query={}&limit=5&fmt=json",
        base,
        urlencoding::encode(&format!("artist:{}", quote_term(name)))
    )
}

/// First hit whose name equals `name`, ignoring case.
pub(super) fn exact_artist_id(response: ArtistSearchResponse, name: &str) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    response
        .artists
        .into_iter()
        .find(|a| a.name.to_lowercase() == wanted)
        .map(|a| a.id)
}

pub(super) fn release_url(base: &str, id: &str) -> String {
    format!(
        "{}/release/{}?inc={}&fmt=json",
        base,
        urlencoding::encode(id),
        RELEASE_INCLUDES.join("+")
    )
}

impl ReleaseSource for MusicBrainzClient {
    fn search_releases(
        &self,
        artist: Option<&str>,
        album: &str,
        limit: usize,
    ) -> Result<Vec<ReleaseHit>, RemoteError> {
        let url = search_url(&self.api_base_url, artist, album, limit);
        let response: SearchResponse = self.get_json(&url)?;
        let mut hits = response.releases;
        hits.truncate(limit);
        Ok(hits)
    }

    fn release_by_id(&self, id: &str) -> Result<RemoteRelease, RemoteError> {
        let url = release_url(&self.api_base_url, id);
        let release: WireRelease = self.get_json(&url)?;
        Ok(release.into())
    }

    fn find_artist_id(&self, name: &str) -> Result<Option<String>, RemoteError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let url = artist_search_url(&self.api_base_url, name);
        let response: ArtistSearchResponse = self.get_json(&url)?;
        Ok(exact_artist_id(response, name))
    }
}
