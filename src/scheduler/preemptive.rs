//! Arrival-aware preemptive scheduling engine.
//!
//! Shared by shortest-job-first and priority scheduling; the two differ
//! only in the ranking rule.
//!
//! # Algorithm
//!
//! Work is kept in two collections: the run queue (arrival order, consumed
//! from the front) and the hold set (arrived work, ordered by the rule).
//!
//! **Preemptive phase**, while the run queue is non-empty:
//! 1. Take the best held process, or the run-queue front if nothing is held.
//! 2. Look ahead at the run-queue front `c`. If `c` arrives strictly before
//!    the current process would finish (`start + remaining - c.arrival > 0`):
//!    - if `c` strictly outranks the current process as ranked at its
//!      dispatch, the current process runs until `c` arrives and is put on
//!      hold, and `c` becomes current;
//!    - otherwise `c` is put on hold.
//!
//!    Repeat until the front arrives at or after completion.
//! 3. Run the current process to completion.
//!
//! **Drain phase**, once the run queue is empty: held processes run to
//! completion in hold order with no further preemption.
//!
//! # Complexity
//! O(n²) worst case for the sorted hold-set insertions.

use std::collections::VecDeque;

use tracing::debug;

use super::cpu::Cpu;
use super::hold::HoldSet;
use super::{arrival_ordered, Scheduler};
use crate::dispatching::RankingRule;
use crate::models::{Process, Schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Preemptive,
    Drain,
}

/// Preemptive scheduler parameterized by a ranking rule.
#[derive(Debug, Clone)]
pub struct PreemptiveScheduler<R> {
    title: &'static str,
    rule: R,
}

impl<R: RankingRule + Clone> PreemptiveScheduler<R> {
    /// Creates a scheduler with a custom title and ranking rule.
    pub fn with_rule(title: &'static str, rule: R) -> Self {
        Self { title, rule }
    }

    /// The ranking rule used for preemption and the hold set.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Scans arrivals that land before `current` would finish.
    ///
    /// Returns the process that will run to completion.
    fn look_ahead(
        &self,
        mut current: Process,
        queue: &mut VecDeque<Process>,
        hold: &mut HoldSet<R>,
        cpu: &mut Cpu,
    ) -> Process {
        while let Some(front) = queue.front() {
            let start = cpu.dispatch_time(&current);
            if start + current.remaining() - front.arrival <= 0 {
                break;
            }
            let Some(candidate) = queue.pop_front() else {
                break;
            };

            // Ranked as of dispatch, before any of the run-up to the arrival.
            if self.rule.preempts(&current, &candidate) {
                cpu.run(&mut current, candidate.arrival - start);
                debug!(
                    policy = self.title,
                    preempted = current.id,
                    by = candidate.id,
                    at = cpu.clock(),
                    remaining = current.remaining(),
                    "preemption"
                );
                hold.push(current);
                current = candidate;
            } else {
                debug!(
                    policy = self.title,
                    running = current.id,
                    deferred = candidate.id,
                    "candidate put on hold"
                );
                hold.push(candidate);
            }
        }
        current
    }
}

impl<R: RankingRule + Clone> Scheduler for PreemptiveScheduler<R> {
    fn name(&self) -> &'static str {
        self.title
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut queue: VecDeque<Process> = arrival_ordered(processes).into();
        let mut hold = HoldSet::new(self.rule.clone());
        let mut cpu = Cpu::new(self.title);
        let mut phase = Phase::Preemptive;

        loop {
            if phase == Phase::Preemptive && queue.is_empty() {
                debug!(policy = self.title, held = hold.len(), "draining hold set");
                phase = Phase::Drain;
            }

            let next = match phase {
                Phase::Preemptive => hold.pop().or_else(|| queue.pop_front()),
                Phase::Drain => hold.pop(),
            };
            let Some(mut current) = next else {
                break;
            };

            if phase == Phase::Preemptive {
                current = self.look_ahead(current, &mut queue, &mut hold, &mut cpu);
            }

            let remaining = current.remaining();
            cpu.run(&mut current, remaining);
            cpu.finish(&current);
        }

        cpu.into_schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::ByArrival;
    use crate::models::TimeSlice;

    #[test]
    fn test_arrival_rule_degenerates_to_fcfs() {
        // Later arrivals never outrank the running process under ARRIVAL.
        let scheduler = PreemptiveScheduler::with_rule("Arrival", ByArrival);
        let input = vec![
            Process::new(1, 4, 0),
            Process::new(2, 3, 2),
            Process::new(3, 1, 3),
        ];
        let schedule = scheduler.schedule(&input);
        assert_eq!(
            schedule.slices,
            vec![
                TimeSlice::new(1, 0, 4),
                TimeSlice::new(2, 4, 7),
                TimeSlice::new(3, 7, 8),
            ]
        );
        assert_eq!(scheduler.name(), "Arrival");
        assert_eq!(scheduler.rule().name(), "ARRIVAL");
    }

    #[test]
    fn test_every_process_completes_once() {
        let scheduler = PreemptiveScheduler::with_rule("Arrival", ByArrival);
        let input: Vec<Process> = (1..=6).map(|i| Process::new(i, 7 - i, i)).collect();
        let schedule = scheduler.schedule(&input);
        assert_eq!(schedule.process_count(), 6);
        for p in &input {
            assert!(schedule.row_for_process(p.id).is_some());
        }
    }
}
