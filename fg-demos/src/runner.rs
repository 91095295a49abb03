//! Headless frame loop: feeds frame durations and scheduled keys to a demo.

use tracing::{debug, info};

use crate::demo::{Demo, FrameOutcome};
use crate::input::ScheduledKey;
use crate::timing::FrameClock;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub frames: u64,
    /// Keys delivered before the frame they are scheduled on.
    pub keys: Vec<ScheduledKey>,
    /// Log the readout every N frames; `None` logs only the final one.
    pub report_every: Option<u64>,
}

/// Frame counts from one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub advanced: u64,
    pub skipped: u64,
    pub paused: u64,
}

pub fn run(demo: &mut dyn Demo, clock: &mut dyn FrameClock, options: &RunOptions) -> RunSummary {
    let mut summary = RunSummary::default();

    for frame in 0..options.frames {
        for scheduled in options.keys.iter().filter(|k| k.frame == frame) {
            debug!(frame, key = ?scheduled.key, "key pressed");
            demo.key(scheduled.key);
        }

        let duration = clock.next_frame();
        match demo.update(duration) {
            FrameOutcome::Paused => summary.paused += 1,
            FrameOutcome::Tick(tick) if tick.is_advanced() => summary.advanced += 1,
            FrameOutcome::Tick(_) => summary.skipped += 1,
        }
        summary.frames += 1;

        if let Some(every) = options.report_every.filter(|n| *n > 0) {
            if (frame + 1) % every == 0 {
                info!(frame = frame + 1, "{}", demo.readout());
            }
        }
    }

    info!(
        title = demo.title(),
        frames = summary.frames,
        advanced = summary.advanced,
        skipped = summary.skipped,
        paused = summary.paused,
        "run finished"
    );
    info!("{}", demo.readout());
    summary
}
