use std::num::NonZeroUsize;

use crate::{Policy, Preemption, QueueOrdering, Scheduler};

/// Round Robin over a FIFO ready queue.
#[derive(Debug, Copy, Clone)]
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin { quantum }
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn ordering(&self) -> QueueOrdering {
        QueueOrdering::Fifo
    }

    fn preemption(&self) -> Preemption {
        Preemption::Quantum(self.quantum)
    }
}
