//! Scheduling policies and metric evaluation.
//!
//! Provides the four classical single-CPU policies and the metrics
//! derived from their schedules.
//!
//! # Policies
//!
//! | Policy | Preemptive | Pending-work order |
//! |--------|-----------|--------------------|
//! | FCFS | no | arrival |
//! | SJF | on arrival | remaining burst |
//! | Priority | on arrival | priority value |
//! | Round-robin | every quantum | circular |
//!
//! Every policy takes the process list by reference and works on its own
//! copy, so running one policy can never affect another's input.
//!
//! # Metrics
//!
//! `ScheduleMetrics` computes average wait, average turnaround,
//! throughput, makespan and CPU utilization.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod cpu;
mod fcfs;
mod hold;
mod kpi;
mod preemptive;
mod priority;
mod round_robin;
mod sjf;

use std::fmt::Debug;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::dispatching::{rules::ByArrival, RankingRule};
use crate::models::{Process, Schedule};

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleMetrics;
pub use preemptive::PreemptiveScheduler;
pub use priority::PriorityScheduler;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};
pub use sjf::SjfScheduler;

/// A single-CPU scheduling policy.
pub trait Scheduler: Send + Sync + Debug {
    /// Human-readable policy title.
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes`.
    ///
    /// The input is cloned; the caller's list is never modified.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// Selectable scheduling policies, in canonical report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come, first-served.
    Fcfs,
    /// Preemptive shortest-job-first.
    Sjf,
    /// Preemptive priority.
    Priority,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl Policy {
    /// All policies in report order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Builds the scheduler for this policy.
    ///
    /// `quantum` is only used by round-robin.
    pub fn scheduler(self, quantum: NonZeroU32) -> Box<dyn Scheduler> {
        match self {
            Policy::Fcfs => Box::new(FcfsScheduler::new()),
            Policy::Sjf => Box::new(SjfScheduler::new()),
            Policy::Priority => Box::new(PriorityScheduler::new()),
            Policy::RoundRobin => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }
}

/// Private copy of `processes`, sorted by arrival (ties by id).
pub(crate) fn arrival_ordered(processes: &[Process]) -> Vec<Process> {
    let mut ordered = processes.to_vec();
    ordered.sort_by(|a, b| ByArrival.compare(a, b));
    ordered
}
