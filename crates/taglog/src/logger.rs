use std::{io::Write as _, process, sync::Arc};

use tracing::{Dispatch, Subscriber, dispatcher};
use tracing_subscriber::{
    Layer, Registry,
    fmt::{self, MakeWriter, writer::MakeWriterExt},
    prelude::*,
    registry::LookupSpan,
};

use crate::{
    config::{DEFAULT_LEVEL, LogConfig, program_name},
    error::{ConfigurationError, InitError},
    filter::{FATAL_TARGET, TARGET, ThresholdFilter},
    format::LineFormatter,
    level::Level,
};

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Handle to a tag and threshold plus the `tracing` dispatcher that formats
/// and writes entries with them.
///
/// Every entry logged through a `Logger` goes to its own dispatcher, whatever
/// subscriber is current on the calling thread. Clones share the same
/// configuration and sinks.
#[derive(Debug, Clone)]
pub struct Logger {
    config: Arc<LogConfig>,
    dispatch: Dispatch,
}

impl Logger {
    /// Creates a logger writing to stdout and stderr, with the given tag and
    /// the default `info` threshold.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_writers(tag, std::io::stdout, std::io::stderr)
    }

    /// Creates a logger tagged with the program's invocation name.
    pub fn for_program() -> Self {
        Self::new(program_name())
    }

    /// Creates a logger writing `DEBUG`/`INFO` lines to `stdout` and
    /// `WARNING`/`ERROR` lines to `stderr`.
    pub fn with_writers<O, E>(tag: impl Into<String>, stdout: O, stderr: E) -> Self
    where
        O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
        E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let config = Arc::new(LogConfig::new(tag, DEFAULT_LEVEL));
        let subscriber =
            Registry::default().with(line_layer::<Registry, _, _>(&config, stdout, stderr));
        Self {
            config,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Dispatcher carrying this logger's layer. Events from other crates
    /// recorded under it get the same layout and threshold.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Returns a copy of the current tag.
    pub fn tag(&self) -> String {
        self.config.tag()
    }

    /// Replaces the tag written into every subsequent line.
    pub fn set_tag(&self, tag: impl Into<String>) {
        self.config.set_tag(tag);
    }

    /// Returns the current threshold.
    pub fn level(&self) -> Level {
        self.config.threshold()
    }

    /// Parses `name` and makes it the threshold.
    ///
    /// An unrecognized name leaves the current threshold in place.
    pub fn set_level(&self, name: &str) -> Result<(), ConfigurationError> {
        let level = name.parse()?;
        self.config.set_threshold(level);
        Ok(())
    }

    /// Makes `level` the threshold.
    pub fn set_threshold(&self, level: Level) {
        self.config.set_threshold(level);
    }

    /// Always fails: `--quiet` was replaced by `--log-level`.
    #[deprecated(note = "use `set_level` instead")]
    pub fn set_quiet(&self) -> Result<(), ConfigurationError> {
        Err(ConfigurationError::Deprecated { option: "quiet" })
    }

    /// Always fails: `--debug` was replaced by `--log-level`.
    #[deprecated(note = "use `set_level` instead")]
    pub fn set_debug(&self) -> Result<(), ConfigurationError> {
        Err(ConfigurationError::Deprecated { option: "debug" })
    }

    /// Always fails: `--verbose` was replaced by `--log-level`.
    #[deprecated(note = "use `set_level` instead")]
    pub fn set_verbose(&self) -> Result<(), ConfigurationError> {
        Err(ConfigurationError::Deprecated { option: "verbose" })
    }

    /// Returns `true` if the threshold lets entries at `level` through.
    pub fn enabled(&self, level: Level) -> bool {
        self.config.permits(level)
    }

    /// Emits `message` at `level` if the threshold permits it.
    ///
    /// [`Level::Fatal`] writes the fatal entry regardless of the threshold
    /// but does not exit; use [`Logger::fatal`] for that.
    pub fn log(&self, level: Level, message: &str) {
        if level != Level::Fatal && !self.enabled(level) {
            return;
        }
        dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => tracing::debug!(target: TARGET, "{message}"),
            Level::Info => tracing::info!(target: TARGET, "{message}"),
            Level::Warning => tracing::warn!(target: TARGET, "{message}"),
            Level::Error => tracing::error!(target: TARGET, "{message}"),
            Level::Fatal => tracing::error!(target: FATAL_TARGET, "{message}"),
        });
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Logs `message` at error severity and exits with [`FATAL_EXIT_CODE`].
    pub fn fatal(&self, message: &str) -> ! {
        self.log(Level::Fatal, message);
        let _ = std::io::stdout().flush();
        process::exit(FATAL_EXIT_CODE)
    }

    /// Makes this logger's dispatcher the global default, so events from
    /// other crates are written in the same layout.
    pub fn install(&self) -> Result<(), InitError> {
        dispatcher::set_global_default(self.dispatch.clone())?;
        Ok(())
    }
}

fn line_layer<S, O, E>(
    config: &Arc<LogConfig>,
    stdout: O,
    stderr: E,
) -> impl Layer<S> + Send + Sync + use<S, O, E>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let writer = stderr.with_max_level(tracing::Level::WARN).or_else(stdout);
    fmt::layer::<S>()
        .event_format(LineFormatter::new(Arc::clone(config)))
        .with_writer(writer)
        .with_filter(ThresholdFilter::new(Arc::clone(config)))
}
