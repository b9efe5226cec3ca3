use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::RwLock;

use crate::level::Level;

/// Threshold a fresh configuration starts with.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Tag and severity threshold shared between a [`crate::Logger`] and the
/// layers built from it.
#[derive(Debug)]
pub struct LogConfig {
    tag: RwLock<String>,
    threshold: AtomicU8,
}

impl LogConfig {
    pub fn new(tag: impl Into<String>, threshold: Level) -> Self {
        Self {
            tag: RwLock::new(tag.into()),
            threshold: AtomicU8::new(threshold as u8),
        }
    }

    /// Returns a copy of the current tag.
    pub fn tag(&self) -> String {
        self.tag.read().clone()
    }

    pub fn set_tag(&self, tag: impl Into<String>) {
        *self.tag.write() = tag.into();
    }

    pub fn threshold(&self) -> Level {
        Level::from_repr(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Returns `true` if an entry at `level` should be emitted.
    pub fn permits(&self, level: Level) -> bool {
        level >= self.threshold()
    }
}

/// Returns the name the program was invoked with, or an empty string if the
/// argument list is empty.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}
