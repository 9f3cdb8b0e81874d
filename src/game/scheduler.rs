//! Deferred effects keyed to game time.
//!
//! Every entry carries the generation of the session that scheduled it, so a
//! restart turns in-flight entries into no-ops instead of letting them leak
//! into the new session.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeferredEvent {
    SpawnFood,
    SpawnPowerUp,
    EndDash,
    ResetMultiplier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledEvent {
    pub due_at: u64,
    seq: u64,
    pub generation: u64,
    pub event: DeferredEvent,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_at: u64, generation: u64, event: DeferredEvent) {
        self.next_seq += 1;
        self.queue.push(Reverse(ScheduledEvent {
            due_at,
            seq: self.next_seq,
            generation,
            event,
        }));
    }

    /// Pop the earliest entry due at or before `now`.
    /// Entries due at the same time come out in scheduling order.
    pub fn pop_due(&mut self, now: u64) -> Option<ScheduledEvent> {
        if self.queue.peek().is_some_and(|Reverse(next)| next.due_at <= now) {
            self.queue.pop().map(|Reverse(e)| e)
        } else {
            None
        }
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(e)| e.due_at)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
