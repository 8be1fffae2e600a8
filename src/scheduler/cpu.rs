//! Single simulated CPU.
//!
//! Owns the service-time cursor and the schedule under construction.
//! Every policy drives the same `Cpu`, so slices and rows are recorded
//! identically regardless of the policy.

use tracing::{debug, trace};

use crate::models::{Process, Schedule, ScheduleRow, TimeSlice};

#[derive(Debug)]
pub(crate) struct Cpu {
    clock: i64,
    schedule: Schedule,
}

impl Cpu {
    pub(crate) fn new(policy: &str) -> Self {
        Self {
            clock: 0,
            schedule: Schedule::new(policy),
        }
    }

    /// Current service time.
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    /// Earliest time `process` can hold the CPU.
    ///
    /// The CPU idles until the arrival when nothing else is ready.
    pub(crate) fn dispatch_time(&self, process: &Process) -> i64 {
        self.clock.max(process.arrival)
    }

    /// Runs `process` for up to `limit` units from its dispatch time.
    ///
    /// Appends one slice when any work was done and moves the cursor to
    /// the end of it. Returns the time actually used.
    pub(crate) fn run(&mut self, process: &mut Process, limit: i64) -> i64 {
        let start = self.dispatch_time(process);
        let used = process.run_for(limit);
        self.clock = start + used;
        if used > 0 {
            trace!(pid = process.id, start, stop = self.clock, "slice");
            self.schedule
                .add_slice(TimeSlice::new(process.id, start, self.clock));
        }
        used
    }

    /// Emits the row of a finished process, completing at the cursor.
    pub(crate) fn finish(&mut self, process: &Process) {
        let row = ScheduleRow::completed(process, self.clock);
        debug!(
            pid = row.id,
            completion = row.completion,
            wait = row.wait,
            "process completed"
        );
        self.schedule.add_row(row);
    }

    pub(crate) fn into_schedule(self) -> Schedule {
        self.schedule
    }
}
