//! Hold set for preempted and deferred processes.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::dispatching::RankingRule;
use crate::models::Process;

/// Arrived, pending work kept sorted by a ranking rule.
///
/// Equal keys are ordered by ascending process id, so `pop` is fully
/// deterministic.
#[derive(Debug, Clone)]
pub(crate) struct HoldSet<R> {
    rule: R,
    entries: VecDeque<Process>,
}

impl<R: RankingRule> HoldSet<R> {
    pub(crate) fn new(rule: R) -> Self {
        Self {
            rule,
            entries: VecDeque::new(),
        }
    }

    /// Inserts a process at its ranked position.
    pub(crate) fn push(&mut self, process: Process) {
        let index = self
            .entries
            .partition_point(|held| self.rule.compare(held, &process) != Ordering::Greater);
        self.entries.insert(index, process);
    }

    /// Removes and returns the best-ranked process.
    pub(crate) fn pop(&mut self) -> Option<Process> {
        self.entries.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{LowestPriorityValue, ShortestRemaining};

    #[test]
    fn test_pop_in_key_order() {
        let mut hold = HoldSet::new(ShortestRemaining);
        hold.push(Process::new(1, 8, 0));
        hold.push(Process::new(2, 3, 0));
        hold.push(Process::new(3, 5, 0));
        assert_eq!(hold.len(), 3);

        let order: Vec<i64> = std::iter::from_fn(|| hold.pop()).map(|p| p.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(hold.is_empty());
    }

    #[test]
    fn test_ties_pop_by_id() {
        let mut hold = HoldSet::new(LowestPriorityValue);
        hold.push(Process::new(5, 1, 0).with_priority(2));
        hold.push(Process::new(2, 9, 0).with_priority(2));
        hold.push(Process::new(4, 3, 0).with_priority(1));

        assert_eq!(hold.pop().map(|p| p.id), Some(4));
        assert_eq!(hold.pop().map(|p| p.id), Some(2));
        assert_eq!(hold.pop().map(|p| p.id), Some(5));
        assert_eq!(hold.pop(), None);
    }
}
