//! Process model.
//!
//! A process is one schedulable unit of CPU work: it arrives at a known
//! time, needs a fixed amount of CPU time, and optionally carries a
//! priority used by the priority scheduler.
//!
//! # Time Representation
//! All times are abstract integer time units relative to t=0.

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// `burst` is the original CPU requirement and is never changed by a
/// scheduler. Progress is tracked separately through [`Process::remaining`],
/// which only decreases and never drops below zero.
///
/// Serialized form carries `id`, `burst`, `arrival` and `priority` only.
/// Deserializing always starts a fresh process with the full burst left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessRecord")]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Total CPU time required (original burst).
    pub burst: i64,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i64,
    /// CPU time still to execute.
    #[serde(skip)]
    remaining: i64,
}

/// Wire shape of a process.
#[derive(Deserialize)]
struct ProcessRecord {
    id: ProcessId,
    burst: i64,
    arrival: i64,
    #[serde(default)]
    priority: i64,
}

impl From<ProcessRecord> for Process {
    fn from(record: ProcessRecord) -> Self {
        Process::new(record.id, record.burst, record.arrival).with_priority(record.priority)
    }
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: ProcessId, burst: i64, arrival: i64) -> Self {
        Self {
            id,
            burst,
            arrival,
            priority: 0,
            remaining: burst.max(0),
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// CPU time still to execute.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Whether all CPU work has been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes up to `time` units of CPU work.
    ///
    /// Returns the time actually consumed, which is `time` clamped to
    /// `[0, remaining]`.
    pub fn run_for(&mut self, time: i64) -> i64 {
        let used = time.clamp(0, self.remaining);
        self.remaining -= used;
        used
    }
}
