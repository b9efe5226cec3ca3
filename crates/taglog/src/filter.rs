use std::sync::Arc;

use tracing::{Metadata, subscriber::Interest};
use tracing_subscriber::layer::{Context, Filter};

use crate::{config::LogConfig, level::Level};

/// Target of entries written through the logger's own methods.
pub(crate) const TARGET: &str = "taglog";
/// Target of fatal entries; these pass regardless of the threshold.
pub(crate) const FATAL_TARGET: &str = "taglog::fatal";

/// Per-layer filter that drops events below the configured threshold.
pub struct ThresholdFilter {
    config: Arc<LogConfig>,
}

impl ThresholdFilter {
    pub fn new(config: Arc<LogConfig>) -> Self {
        Self { config }
    }

    fn permits(&self, metadata: &Metadata<'_>) -> bool {
        if !metadata.is_event() {
            return false;
        }
        if metadata.target() == FATAL_TARGET {
            return true;
        }
        Level::from_tracing(metadata.level()).is_some_and(|level| self.config.permits(level))
    }
}

impl<S> Filter<S> for ThresholdFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.permits(metadata)
    }

    fn callsite_enabled(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The threshold moves at runtime, so nothing may be cached per callsite.
        Interest::sometimes()
    }
}
