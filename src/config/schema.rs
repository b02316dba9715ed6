use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/brainzdiff/config.toml` or `~/.config/brainzdiff/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `BRAINZDIFF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub musicbrainz: MusicBrainzSettings,
    pub report: ReportSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "m4a".into(),
                "ogg".into(),
            ],
            follow_links: true,
            include_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MusicBrainzSettings {
    /// Web service root, without a trailing slash.
    pub api_base_url: String,
    /// Site root used for release/recording permalinks and editor pages.
    pub site_base_url: String,
    /// MusicBrainz rejects anonymous clients; identify the application here.
    pub user_agent: String,
    /// How many search hits to fetch in full before scoring.
    pub search_limit: usize,
    /// Minimum gap between two requests (milliseconds).
    pub request_interval_ms: u64,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for MusicBrainzSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://musicbrainz.org/ws/2".to_string(),
            site_base_url: "https://musicbrainz.org".to_string(),
            user_agent: concat!(
                "brainzdiff/",
                env!("CARGO_PKG_VERSION"),
                " ( https://crates.io/crates/brainzdiff )"
            )
            .to_string(),
            search_limit: 10,
            request_interval_ms: 1000,
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Width of the left (local) column in side-by-side rows.
    pub left_width: usize,
    /// Width of the `=` banners and `-` separators.
    pub separator_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            left_width: 60,
            separator_width: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show the report in a scrollable full-screen view instead of printing it.
    pub pager: bool,
    /// Whether to offer opening MusicBrainz editor pages after the report.
    pub offer_actions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            pager: false,
            offer_actions: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
