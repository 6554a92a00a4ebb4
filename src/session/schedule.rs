//! Generation-guarded delayed tasks.
//!
//! Delayed effects (the mismatch flip-back, the hint re-hide) are data, not
//! callbacks: a [`ScheduledTask`] with a due time and the [`Generation`] it
//! was scheduled under. The session pumps the queue with its current
//! timestamp; a task scheduled before a reset carries a stale generation and
//! is discarded without touching the new session's state.

use serde::{Deserialize, Serialize};

use crate::cards::{PairKey, SlotId};
use crate::core::Millis;

/// Session generation counter, bumped on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The next generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// What a due task does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Flip a mismatched turn's cards back down and unlock input.
    ResolveMismatch,

    /// End a hint's display window.
    HintExpiry {
        /// The hinted pair.
        pair: PairKey,
        /// Where its two cards sit.
        slots: (SlotId, SlotId),
    },
}

/// A delayed effect waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// What to do when due.
    pub kind: TaskKind,

    /// When to do it.
    pub due: Millis,

    /// Session generation at schedule time. Checked before applying.
    pub generation: Generation,
}

/// Pending delayed effects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskQueue {
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task.
    pub fn schedule(&mut self, task: ScheduledTask) {
        self.tasks.push(task);
    }

    /// Remove and return every task due at `now`, ordered by due time.
    pub fn take_due(&mut self, now: Millis) -> Vec<ScheduledTask> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|task| task.due);
        due
    }

    /// Earliest due time among pending tasks, for callers that sleep.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.tasks.iter().map(|task| task.due).min()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(due: u64, generation: u64) -> ScheduledTask {
        ScheduledTask {
            kind: TaskKind::ResolveMismatch,
            due: Millis::new(due),
            generation: Generation(generation),
        }
    }

    #[test]
    fn test_generation_next() {
        let g = Generation::default();
        assert_eq!(g, Generation(0));
        assert_eq!(g.next(), Generation(1));
        assert_eq!(g.next().next(), Generation(2));
    }

    #[test]
    fn test_take_due_splits_by_time() {
        let mut queue = TaskQueue::new();
        queue.schedule(task(1000, 0));
        queue.schedule(task(2000, 0));

        let due = queue.take_due(Millis::new(1500));

        assert_eq!(due.len(), 1);
        assert_eq!(due[0].due, Millis::new(1000));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_due(), Some(Millis::new(2000)));
    }

    #[test]
    fn test_take_due_orders_by_due_time() {
        let mut queue = TaskQueue::new();
        queue.schedule(task(3000, 0));
        queue.schedule(task(1000, 0));
        queue.schedule(task(2000, 0));

        let due = queue.take_due(Millis::new(5000));

        let times: Vec<u64> = due.iter().map(|t| t.due.raw()).collect();
        assert_eq!(times, vec![1000, 2000, 3000]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_due_exactly_at_now() {
        let mut queue = TaskQueue::new();
        queue.schedule(task(1000, 0));

        assert_eq!(queue.take_due(Millis::new(999)).len(), 0);
        assert_eq!(queue.take_due(Millis::new(1000)).len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut queue = TaskQueue::new();
        queue.schedule(task(1000, 0));
        queue.schedule(task(2000, 0));

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
    }

    #[test]
    fn test_serialization() {
        let mut queue = TaskQueue::new();
        queue.schedule(ScheduledTask {
            kind: TaskKind::HintExpiry {
                pair: PairKey::new(3),
                slots: (SlotId::new(1), SlotId::new(8)),
            },
            due: Millis::new(1500),
            generation: Generation(2),
        });

        let json = serde_json::to_string(&queue).unwrap();
        let deserialized: TaskQueue = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.next_due(), Some(Millis::new(1500)));
    }
}
