//! Taglog
//!
//! A small logging facade that writes every entry as one line:
//!
//! ```text
//! <RFC3339 timestamp> <hostname> <tag>[<pid>]: <SEVERITY> <message>
//! ```
//!
//! `DEBUG` and `INFO` lines go to stdout, `WARNING` and `ERROR` lines to
//! stderr. Filtering and dispatch are done by `tracing`; this crate supplies
//! the layout, the threshold and the tag.
//!
//! - [`Logger`] is an injectable handle owning a tag, a threshold and the
//!   dispatcher its entries are written through.
//! - The free functions mirror it over a process-wide logger tagged with the
//!   program's invocation name.
//!
//! Misconfiguration is reported as [`ConfigurationError`]. Call sites that
//! should terminate on it use [`OrFatal::or_fatal`].

mod config;
mod error;
mod filter;
mod format;
mod level;
mod logger;

use std::sync::OnceLock;

pub use config::{DEFAULT_LEVEL, program_name};
pub use error::{ConfigurationError, InitError};
pub use level::Level;
pub use logger::{FATAL_EXIT_CODE, Logger};

/// Process-wide logger plus the outcome of installing it globally.
struct Global {
    logger: Logger,
    installed: Result<(), InitError>,
}

static GLOBAL: OnceLock<Global> = OnceLock::new();

fn global_or_install(make: impl FnOnce() -> Logger) -> &'static Global {
    GLOBAL.get_or_init(|| {
        let logger = make();
        let installed = logger.install();
        Global { logger, installed }
    })
}

/// Creates the process-wide logger, tagged with the program's invocation
/// name, and installs it as the global subscriber.
///
/// Every call reports whether the install succeeded, including calls made
/// after [`logger`] already created the process-wide logger.
pub fn init() -> Result<&'static Logger, InitError> {
    init_with(Logger::for_program)
}

/// Same as [`init`] with a caller-built logger.
///
/// `make` only runs if no process-wide logger exists yet.
pub fn init_with(make: impl FnOnce() -> Logger) -> Result<&'static Logger, InitError> {
    let global = global_or_install(make);
    global.installed.map(|()| &global.logger)
}

/// Returns the process-wide logger, creating and installing it on first use.
///
/// Its own entries are always written in the fixed layout, even if another
/// subscriber owns the global slot; [`init`] reports that case.
pub fn logger() -> &'static Logger {
    &global_or_install(Logger::for_program).logger
}

/// Replaces the tag written into every subsequent line.
pub fn set_tag(tag: impl Into<String>) {
    logger().set_tag(tag);
}

/// Sets the threshold by name. See [`Logger::set_level`].
pub fn set_level(name: &str) -> Result<(), ConfigurationError> {
    logger().set_level(name)
}

/// Makes `level` the threshold.
pub fn set_threshold(level: Level) {
    logger().set_threshold(level);
}

#[deprecated(note = "use `set_level` instead")]
#[allow(deprecated)]
pub fn set_quiet() -> Result<(), ConfigurationError> {
    logger().set_quiet()
}

#[deprecated(note = "use `set_level` instead")]
#[allow(deprecated)]
pub fn set_debug() -> Result<(), ConfigurationError> {
    logger().set_debug()
}

#[deprecated(note = "use `set_level` instead")]
#[allow(deprecated)]
pub fn set_verbose() -> Result<(), ConfigurationError> {
    logger().set_verbose()
}

/// Logs a message at `level`. See [`Logger::log`].
pub fn log(level: Level, message: &str) {
    logger().log(level, message);
}

/// Logs a message with severity DEBUG.
pub fn debug(message: &str) {
    logger().debug(message);
}

/// Logs a message with severity INFO.
pub fn info(message: &str) {
    logger().info(message);
}

/// Logs a message with severity WARNING.
pub fn warning(message: &str) {
    logger().warning(message);
}

/// Logs a message with severity ERROR.
pub fn error(message: &str) {
    logger().error(message);
}

/// Logs a message with severity ERROR, then exits with [`FATAL_EXIT_CODE`].
pub fn fatal(message: &str) -> ! {
    logger().fatal(message)
}

/// Turns a configuration failure into the fatal path.
pub trait OrFatal<T> {
    /// Returns the value, or logs the error through [`fatal`] and exits.
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, ConfigurationError> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err.to_string()),
        }
    }
}
