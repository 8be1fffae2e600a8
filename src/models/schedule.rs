//! Schedule (simulation result) model.
//!
//! A schedule is the complete outcome of running one policy over a
//! process batch: the Gantt trace of CPU-occupancy intervals and one
//! finalized report row per process.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// The outcome of one scheduler run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Title of the policy that produced this schedule.
    pub policy: String,
    /// Gantt trace, in increasing start order.
    pub slices: Vec<TimeSlice>,
    /// Finalized rows, in completion order.
    pub rows: Vec<ScheduleRow>,
}

/// One contiguous interval during which a process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

/// One finalized report line per process.
///
/// Always satisfies `turnaround == burst + wait` and
/// `completion == arrival + wait + burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub id: ProcessId,
    /// Process priority.
    pub priority: i64,
    /// Original burst.
    pub burst: i64,
    /// Arrival time.
    pub arrival: i64,
    /// Time spent eligible but not running.
    pub wait: i64,
    /// Arrival to completion.
    pub turnaround: i64,
    /// Time at which the last unit of work finished.
    pub completion: i64,
}

impl TimeSlice {
    /// Creates a new time slice.
    pub fn new(process_id: ProcessId, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Duration (stop - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

impl ScheduleRow {
    /// Builds the row for a process that finished at `completion`.
    ///
    /// Uses the original burst, so wait covers every interval the process
    /// spent ready but not running, across all of its turns.
    pub fn completed(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait: turnaround - process.burst,
            turnaround,
            completion,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule for the named policy.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            ..Default::default()
        }
    }

    /// Appends a slice to the trace.
    pub fn add_slice(&mut self, slice: TimeSlice) {
        self.slices.push(slice);
    }

    /// Appends a finalized row.
    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of finalized rows.
    pub fn process_count(&self) -> usize {
        self.rows.len()
    }

    /// Makespan: latest completion across all rows.
    pub fn makespan(&self) -> i64 {
        self.rows.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Returns all slices of a given process, in trace order.
    pub fn slices_for_process(&self, id: ProcessId) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.process_id == id).collect()
    }

    /// Finds the row of a given process.
    pub fn row_for_process(&self, id: ProcessId) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Completion time of a process.
    pub fn completion_of(&self, id: ProcessId) -> Option<i64> {
        self.row_for_process(id).map(|r| r.completion)
    }

    /// Process ids in the order they first received the CPU.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        let mut order: Vec<ProcessId> = Vec::new();
        for s in &self.slices {
            if !order.contains(&s.process_id) {
                order.push(s.process_id);
            }
        }
        order
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Whether the trace has no idle gaps between consecutive slices.
    pub fn is_contiguous(&self) -> bool {
        self.slices.windows(2).all(|w| w[0].stop == w[1].start)
    }

    /// Whether slices are ordered, non-empty and non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.slices.iter().all(|s| s.stop > s.start)
            && self.slices.windows(2).all(|w| w[0].stop <= w[1].start)
    }
}
