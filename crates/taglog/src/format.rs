//! Fixed single-line layout:
//!
//! ```text
//! <RFC3339 timestamp> <hostname> <tag>[<pid>]: <SEVERITY> <message>
//! ```

use std::{
    fmt::{self, Write as _},
    process,
    sync::Arc,
};

use chrono::{Local, SecondsFormat};
use tracing::{
    Event, Metadata, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
    registry::LookupSpan,
};

use crate::config::LogConfig;

/// One formatted entry. `Display` writes the line including its trailing
/// newline.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub timestamp: &'a str,
    pub hostname: &'a str,
    pub tag: &'a str,
    pub pid: u32,
    pub severity: &'a str,
    pub message: &'a str,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}[{}]: {} {}",
            self.timestamp, self.hostname, self.tag, self.pid, self.severity, self.message
        )
    }
}

/// Event formatter producing [`Line`]s.
///
/// The timestamp, hostname and tag are all read when the event is formatted,
/// not when it was recorded.
pub struct LineFormatter {
    config: Arc<LogConfig>,
}

impl LineFormatter {
    pub fn new(config: Arc<LogConfig>) -> Self {
        Self { config }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let timestamp = timestamp_now();
        let hostname = hostname();
        let tag = self.config.tag();
        let line = Line {
            timestamp: &timestamp,
            hostname: &hostname,
            tag: &tag,
            pid: process::id(),
            severity: severity_label(event.metadata()),
            message: &visitor.message,
        };
        write!(writer, "{line}")
    }
}

/// Current local time in RFC 3339 with second precision, `Z` for UTC.
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Machine host name, or an empty string if it cannot be determined.
pub fn hostname() -> String {
    ::hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}

/// Upper-case severity token. Fatal entries travel at error level and are
/// labelled `ERROR`.
pub fn severity_label(metadata: &Metadata<'_>) -> &'static str {
    match *metadata.level() {
        tracing::Level::ERROR => "ERROR",
        tracing::Level::WARN => "WARNING",
        tracing::Level::INFO => "INFO",
        tracing::Level::DEBUG => "DEBUG",
        _ => "TRACE",
    }
}

/// Collects the `message` field; every other field is dropped.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        }
    }
}
