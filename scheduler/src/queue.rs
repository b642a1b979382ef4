use std::collections::VecDeque;

use crate::{Pid, ProcessTable};

/// How a [`ReadyQueue`] orders the processes it holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueueOrdering {
    /// Insertion at the tail, removal at the head.
    Fifo,

    /// Ascending remaining time, equal keys keep their insertion order.
    ShortestRemaining,
}

/// Places `pid` before the first entry whose key is strictly greater,
/// or at the tail if there is none.
fn insert_sorted<F>(entries: &mut VecDeque<Pid>, pid: Pid, key: F)
where
    F: Fn(Pid) -> usize,
{
    let new_key = key(pid);
    match entries.iter().position(|&other| key(other) > new_key) {
        Some(index) => entries.insert(index, pid),
        None => entries.push_back(pid),
    }
}

/// The processes that wait for the CPU.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    ordering: QueueOrdering,
    entries: VecDeque<Pid>,
}

impl ReadyQueue {
    pub fn new(ordering: QueueOrdering) -> Self {
        ReadyQueue {
            ordering,
            entries: VecDeque::new(),
        }
    }

    /// Adds a process. The table supplies the remaining time used by
    /// [`QueueOrdering::ShortestRemaining`].
    pub fn enqueue(&mut self, pid: Pid, table: &ProcessTable) {
        match self.ordering {
            QueueOrdering::Fifo => self.entries.push_back(pid),
            QueueOrdering::ShortestRemaining => {
                insert_sorted(&mut self.entries, pid, |pid| table[pid].remaining_time())
            }
        }
    }

    pub fn dequeue_front(&mut self) -> Option<Pid> {
        self.entries.pop_front()
    }

    pub fn peek_front(&self) -> Option<Pid> {
        self.entries.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }
}

/// The processes that perform simulated I/O, ordered ascending by the
/// time they still have to stay blocked.
#[derive(Debug, Clone, Default)]
pub struct BlockedQueue {
    entries: VecDeque<Pid>,
}

impl BlockedQueue {
    pub fn new() -> Self {
        BlockedQueue::default()
    }

    /// Adds a process whose blocked time has already been set.
    pub fn block(&mut self, pid: Pid, table: &ProcessTable) {
        insert_sorted(&mut self.entries, pid, |pid| table[pid].blocked_time());
    }

    /// Counts one time unit of I/O for every blocked process.
    pub fn age_all(&self, table: &mut ProcessTable) {
        for &pid in &self.entries {
            table[pid].age();
        }
    }

    /// Removes and returns, in queue order, every process whose
    /// countdown reached zero.
    pub fn release_ready(&mut self, table: &ProcessTable) -> Vec<Pid> {
        let mut released = vec![];
        while let Some(&pid) = self.entries.front() {
            if table[pid].blocked_time() != 0 {
                break;
            }
            self.entries.pop_front();
            released.push(pid);
        }
        released
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }
}
