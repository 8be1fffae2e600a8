//! Built-in ranking rules.
//!
//! # Rules
//!
//! - **ARRIVAL**: earliest arrival first (FCFS order, run-queue order)
//! - **SRT**: shortest remaining burst first (SJF hold set and preemption)
//! - **PRIORITY**: lowest priority value first (Priority hold set)
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{RankKey, RankingRule};
use crate::models::Process;

/// First come, first served.
///
/// Orders processes by arrival time. Used to seed every run queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByArrival;

impl RankingRule for ByArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest remaining burst.
///
/// Orders processes by the CPU time they still need. For a process that
/// has not run yet this is its full burst, which makes the rule
/// Shortest-Job-First on fresh arrivals.
///
/// The key is whatever `remaining` holds when the rule is asked. The
/// preemptive engine asks about the running process as it was at dispatch,
/// so preemption is not shortest-remaining-time-first: a process that has
/// nearly finished can still be preempted by a shorter arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl RankingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.remaining()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Burst"
    }
}

/// Static priority.
///
/// Lower numeric priority is more urgent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriorityValue;

impl RankingRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_by_arrival() {
        let early = Process::new(9, 10, 1);
        let late = Process::new(1, 1, 5);
        assert_eq!(ByArrival.compare(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_shortest_remaining_uses_remaining_not_burst() {
        let mut started = Process::new(1, 10, 0);
        started.run_for(8);
        let fresh = Process::new(2, 5, 0);
        assert_eq!(ShortestRemaining.key(&started), 2);
        assert_eq!(ShortestRemaining.compare(&started, &fresh), Ordering::Less);
    }

    #[test]
    fn test_lowest_priority_value() {
        let urgent = Process::new(2, 5, 0).with_priority(1);
        let relaxed = Process::new(1, 5, 0).with_priority(4);
        assert_eq!(LowestPriorityValue.compare(&urgent, &relaxed), Ordering::Less);
    }

    #[test]
    fn test_tie_breaks_by_id() {
        let a = Process::new(3, 5, 0);
        let b = Process::new(1, 5, 0);
        assert_eq!(ShortestRemaining.compare(&a, &b), Ordering::Greater);
        assert_eq!(ByArrival.compare(&b, &a), Ordering::Less);
        assert_eq!(ByArrival.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_preempts_is_strict() {
        let running = Process::new(1, 4, 0);
        let equal = Process::new(2, 4, 1);
        let shorter = Process::new(3, 3, 1);
        assert!(!ShortestRemaining.preempts(&running, &equal));
        assert!(ShortestRemaining.preempts(&running, &shorter));
    }

    #[test]
    fn test_shortest_remaining_ranks_given_state() {
        // Ranked as passed in: a fresh 5-unit process loses to a 4-unit
        // arrival, the same process with 2 units left does not.
        let mut running = Process::new(1, 5, 0);
        let arriving = Process::new(2, 4, 3);
        assert!(ShortestRemaining.preempts(&running, &arriving));
        running.run_for(3);
        assert!(!ShortestRemaining.preempts(&running, &arriving));
    }

    #[test]
    fn test_priority_preempts_on_lower_value() {
        let running = Process::new(1, 4, 0).with_priority(3);
        let urgent = Process::new(2, 4, 1).with_priority(1);
        let same = Process::new(3, 4, 1).with_priority(3);
        assert!(LowestPriorityValue.preempts(&running, &urgent));
        assert!(!LowestPriorityValue.preempts(&urgent, &running));
        assert!(!LowestPriorityValue.preempts(&running, &same));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ByArrival.name(), "ARRIVAL");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Burst");
        assert_eq!(LowestPriorityValue.name(), "PRIORITY");
    }
}
