use crate::config::Settings;

/// Settings for this run; any load or validation problem is reported on
/// stderr and the comparison goes ahead with defaults.
pub fn load_settings() -> Settings {
    let loaded = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    loaded.unwrap_or_else(|reason| {
        eprintln!("brainzdiff: {reason}; using defaults");
        Settings::default()
    })
}
