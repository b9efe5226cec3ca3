use taglog::Level;

use crate::Harness;

#[test]
fn below_threshold_produces_nothing() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;
    logger.set_threshold(Level::Error);

    logger.debug("d");
    logger.info("i");
    logger.warning("w");

    assert!(harness.stdout.is_empty());
    assert!(harness.stderr.is_empty());
}

#[test]
fn info_threshold_hides_debug_until_lowered() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;

    logger.set_level("info").unwrap();
    logger.debug("x");
    assert!(harness.stdout.is_empty());

    logger.set_level("debug").unwrap();
    logger.debug("x");
    assert_eq!(harness.stdout.lines().len(), 1);
    assert!(harness.stdout.contents().ends_with(": DEBUG x\n"));
}

#[test]
fn threshold_applies_to_foreign_events() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;
    logger.set_threshold(Level::Warning);

    harness.run(|| {
        tracing::info!(target: "other", "quiet");
        tracing::trace!(target: "other", "never");
        tracing::error!(target: "other", "loud");
    });

    assert!(harness.stdout.is_empty());
    assert_eq!(harness.stderr.lines().len(), 1);
    assert!(harness.stderr.contents().ends_with(": ERROR loud\n"));
}

#[test]
fn trace_events_are_dropped_even_at_lowest_threshold() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;
    logger.set_threshold(Level::Debug);

    harness.run(|| tracing::trace!("never"));

    assert!(harness.all_lines().is_empty());
}

#[test]
fn fatal_entry_is_written_at_any_threshold() {
    for threshold in Level::ALL {
        let harness = Harness::new("svc");
        let logger = &harness.logger;
        logger.set_threshold(threshold);

        logger.log(Level::Fatal, "boom");

        let lines = harness.stderr.lines();
        assert_eq!(lines.len(), 1, "threshold {threshold}");
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].ends_with(" boom"));
        assert!(harness.stdout.is_empty());
    }
}

#[test]
fn rejected_level_keeps_previous_threshold() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;
    logger.set_level("error").unwrap();

    assert!(logger.set_level("bogus").is_err());
    logger.warning("dropped");
    logger.error("kept");

    assert_eq!(harness.all_lines().len(), 1);
    assert!(harness.stderr.contents().contains("svc["));
}

#[test]
fn threshold_changes_take_effect_on_the_same_callsite() {
    let harness = Harness::new("svc");
    let logger = &harness.logger;

    for level in [Level::Fatal, Level::Debug, Level::Fatal] {
        logger.set_threshold(level);
        harness.run(|| tracing::info!(target: "other", "tick"));
    }

    assert_eq!(harness.stdout.lines().len(), 1);
}
