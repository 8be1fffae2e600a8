//! Round-robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time to the tail
//!    of the circular queue (arrival order, ties by id).
//! 2. Run the queue head for `min(quantum, remaining)`.
//! 3. If it finished, emit its row; otherwise admit the arrivals that
//!    happened during the turn, then re-append it at the tail.
//! 4. If nothing is ready, the CPU idles until the next arrival.
//!
//! A final turn shorter than the quantum ends exactly at completion; the
//! clock never advances past the work actually done.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::debug;

use super::cpu::Cpu;
use super::{arrival_ordered, Scheduler};
use crate::models::{Process, Schedule};

/// Default time quantum.
pub const DEFAULT_QUANTUM: NonZeroU32 = match NonZeroU32::new(3) {
    Some(quantum) => quantum,
    None => panic!("default quantum must be non-zero"),
};

/// Round-robin scheduler with a fixed quantum.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let scheduler = RoundRobinScheduler::new(NonZeroU32::new(3).unwrap());
/// let schedule = scheduler.schedule(&[Process::new(1, 7, 0)]);
/// assert_eq!(schedule.slices.len(), 3);
/// assert_eq!(schedule.completion_of(1), Some(7));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU32,
}

impl RoundRobinScheduler {
    /// Creates a round-robin scheduler with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }

    /// Time quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

/// Moves every process that arrived by `now` to the ready queue.
fn admit(pending: &mut VecDeque<Process>, ready: &mut VecDeque<Process>, now: i64) {
    while pending.front().is_some_and(|p| p.arrival <= now) {
        if let Some(process) = pending.pop_front() {
            ready.push_back(process);
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round-robin"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let quantum = i64::from(self.quantum.get());
        let mut pending: VecDeque<Process> = arrival_ordered(processes).into();
        let mut ready: VecDeque<Process> = VecDeque::with_capacity(pending.len());
        let mut cpu = Cpu::new(self.name());

        loop {
            admit(&mut pending, &mut ready, cpu.clock());
            let next = ready.pop_front().or_else(|| pending.pop_front());
            let Some(mut current) = next else {
                break;
            };

            cpu.run(&mut current, quantum);
            if current.is_finished() {
                cpu.finish(&current);
            } else {
                admit(&mut pending, &mut ready, cpu.clock());
                debug!(
                    pid = current.id,
                    remaining = current.remaining(),
                    at = cpu.clock(),
                    "quantum expired"
                );
                ready.push_back(current);
            }
        }

        cpu.into_schedule()
    }
}
