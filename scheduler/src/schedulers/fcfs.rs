use crate::{Policy, QueueOrdering, Scheduler};

/// First Come First Served: the ready queue is a plain FIFO and the
/// running process keeps the CPU until it finishes or blocks.
#[derive(Debug, Default, Copy, Clone)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn ordering(&self) -> QueueOrdering {
        QueueOrdering::Fifo
    }
}
