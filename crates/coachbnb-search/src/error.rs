use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchCoreError>;

/// Top-level error type for the search core.
///
/// Geocoding failures are *not* surfaced through this type during a
/// search: resolution degrades to an unfiltered search instead. The
/// variant exists for callers driving the geocoding crate directly.
#[derive(Error, Debug)]
pub enum SearchCoreError {
    #[error(transparent)]
    Geocoding(#[from] coachbnb_geocoding::GeocodingError),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Repository error: {0}")]
    Repository(String),
    #[error("Init logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
