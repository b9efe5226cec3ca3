mod concurrency;
mod filtering;

use taglog::Logger;
use test_util::CapturedOutput;

/// Logger writing into captured stdout and stderr buffers.
struct Harness {
    logger: Logger,
    stdout: CapturedOutput,
    stderr: CapturedOutput,
}

impl Harness {
    fn new(tag: &str) -> Self {
        let stdout = CapturedOutput::new();
        let stderr = CapturedOutput::new();
        let logger = Logger::with_writers(tag, stdout.clone(), stderr.clone());
        Self {
            logger,
            stdout,
            stderr,
        }
    }

    /// Runs `f` with the logger's dispatcher as the thread default, so plain
    /// `tracing` events reach it.
    fn run(&self, f: impl FnOnce()) {
        tracing::dispatcher::with_default(self.logger.dispatch(), f);
    }

    /// Lines from both streams, stdout first.
    fn all_lines(&self) -> Vec<String> {
        let mut lines = self.stdout.lines();
        lines.extend(self.stderr.lines());
        lines
    }
}

/// Tag field of a formatted line.
fn tag_of(line: &str) -> &str {
    let field = line.split(' ').nth(2).unwrap_or_default();
    field.rsplit_once('[').map_or(field, |(tag, _)| tag)
}
