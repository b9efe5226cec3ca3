use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Harness, tag_of};

const TAGS: [&str; 2] = ["alpha", "a-much-longer-beta-tag"];
const LINES: usize = 2_000;

#[test]
fn tag_swaps_never_tear_formatted_lines() {
    let harness = Harness::new(TAGS[0]);
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        scope.spawn(|| {
            let mut next = 1;
            while !done.load(Ordering::Acquire) {
                harness.logger.set_tag(TAGS[next]);
                next ^= 1;
            }
        });

        for n in 0..LINES {
            harness.logger.info(&format!("line {n}"));
        }
        done.store(true, Ordering::Release);
    });

    let lines = harness.stdout.lines();
    assert_eq!(lines.len(), LINES);
    for line in &lines {
        let tag = tag_of(line);
        assert!(TAGS.contains(&tag), "unexpected tag {tag:?} in {line:?}");
    }
}

#[test]
fn concurrent_emitters_keep_lines_whole() {
    let harness = Harness::new(TAGS[0]);

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let harness = &harness;
            scope.spawn(move || {
                for n in 0..250 {
                    harness.logger.set_tag(TAGS[(worker + n) % 2]);
                    harness.logger.warning(&format!("worker {worker} line {n}"));
                }
            });
        }
    });

    let lines = harness.stderr.lines();
    assert_eq!(lines.len(), 1_000);
    assert!(lines.iter().all(|line| TAGS.contains(&tag_of(line))));
    assert!(lines.iter().all(|line| line.contains(": WARNING worker ")));
}
