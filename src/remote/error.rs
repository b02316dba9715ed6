use thiserror::Error;

/// Failures talking to the MusicBrainz web service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("MusicBrainz answered HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("failed to read response from {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
