use crate::{Policy, Preemption, QueueOrdering, Scheduler};

/// Shortest Remaining Time Next.
///
/// Same queue as [`Sjf`](crate::schedulers::Sjf), but an arriving or
/// unblocked process with strictly less remaining time takes the CPU.
#[derive(Debug, Default, Copy, Clone)]
pub struct Srtn;

impl Scheduler for Srtn {
    fn policy(&self) -> Policy {
        Policy::Srtn
    }

    fn ordering(&self) -> QueueOrdering {
        QueueOrdering::ShortestRemaining
    }

    fn preemption(&self) -> Preemption {
        Preemption::ShorterRemaining
    }
}
