//! Logging integration for roomreg.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-submission spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "roomreg_forms=trace"), falling back to "info" if it does not parse. In
/// debug mode a pretty, human-readable format is used; otherwise structured
/// JSON. Output goes to stderr so that stdout stays free for results.
///
/// Installing a subscriber twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one submit attempt.
///
/// Everything logged while the schema runs and the error snapshot is rebuilt
/// carries the attempt number.
///
/// # Examples
///
/// ```
/// use roomreg_core::logging::submission_span;
///
/// let span = submission_span(1);
/// let _guard = span.enter();
/// tracing::info!("validating");
/// ```
pub fn submission_span(attempt: u64) -> tracing::Span {
    tracing::info_span!("submit", attempt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings::default();
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_setup_logging_bad_filter_falls_back() {
        let mut settings = Settings::default();
        settings.debug = false;
        settings.log_level = "=[not a filter".to_string();
        setup_logging(&settings);
    }

    #[test]
    fn test_submission_span_enters() {
        let span = submission_span(7);
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
