//! Preemptive shortest-job-first scheduler.

use super::preemptive::PreemptiveScheduler;
use crate::dispatching::rules::ShortestRemaining;

/// Shortest-job-first with preemption on arrival (shortest remaining time).
///
/// An arriving process preempts the running one only when its burst is
/// strictly shorter than the remaining burst the running process had when
/// it was dispatched.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Scheduler, SjfScheduler};
///
/// let processes = vec![Process::new(1, 8, 0), Process::new(2, 2, 1)];
/// let schedule = SjfScheduler::new().schedule(&processes);
/// assert_eq!(schedule.completion_of(2), Some(3));
/// assert_eq!(schedule.completion_of(1), Some(10));
/// ```
pub type SjfScheduler = PreemptiveScheduler<ShortestRemaining>;

impl PreemptiveScheduler<ShortestRemaining> {
    /// Creates a new SJF scheduler.
    pub fn new() -> Self {
        Self::with_rule("Shortest-job-first", ShortestRemaining)
    }
}

impl Default for PreemptiveScheduler<ShortestRemaining> {
    fn default() -> Self {
        Self::new()
    }
}
