use crate::config::LoggingSettings;

/// Install the terminal logger at the configured level.
pub fn init_logging(settings: &LoggingSettings) {
    let level = settings
        .level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Warn);

    let mut clog = colog::default_builder();
    clog.filter(None, level);
    // A second init (e.g. from tests) keeps the first logger.
    let _ = clog.try_init();
}
