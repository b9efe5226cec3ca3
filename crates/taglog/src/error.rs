/// Error returned when the logger is asked to adopt a configuration it cannot
/// honor.
///
/// Callers that want the classic behavior of terminating on a bad
/// configuration pass the result through [`crate::OrFatal::or_fatal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("not a valid level: \"{0}\"")]
    InvalidLevel(String),

    #[error("--{option} has been deprecated in favour of --log-level")]
    Deprecated { option: &'static str },
}

/// Error returned when the logger could not become the global subscriber.
///
/// The logger still writes its own entries; only events from other crates
/// bypass it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("another global subscriber was installed first")]
    AlreadyInstalled,
}

impl From<tracing::dispatcher::SetGlobalDefaultError> for InitError {
    fn from(_: tracing::dispatcher::SetGlobalDefaultError) -> Self {
        InitError::AlreadyInstalled
    }
}
