use crate::{Policy, QueueOrdering, Scheduler};

/// Non-preemptive Shortest Job First.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn ordering(&self) -> QueueOrdering {
        QueueOrdering::ShortestRemaining
    }
}
