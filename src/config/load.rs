use std::{env, path::PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

/// Prefix of the environment overrides, e.g. `BRAINZDIFF__UI__PAGER=true`.
const ENV_PREFIX: &str = "BRAINZDIFF";
/// Names an explicit config file, bypassing the XDG lookup.
const CONFIG_PATH_VAR: &str = "BRAINZDIFF_CONFIG_PATH";

impl Settings {
    /// Build the settings for one comparison run.
    ///
    /// `BRAINZDIFF__SECTION__KEY` variables override `config.toml`, which
    /// overrides the struct defaults. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the report or the MusicBrainz client cannot work with.
    ///
    /// Every problem is listed, separated by `; `.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();
        if self.report.left_width == 0 {
            problems.push("report.left_width must be >= 1".to_string());
        }
        if self.musicbrainz.search_limit == 0 {
            problems.push("musicbrainz.search_limit must be >= 1".to_string());
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            problems.push(format!(
                "logging.level '{}' is not a log level",
                self.logging.level
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

/// `BRAINZDIFF_CONFIG_PATH` when set, else the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/brainzdiff/config.toml`, falling back to
/// `~/.config/brainzdiff/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("brainzdiff").join("config.toml"))
}
