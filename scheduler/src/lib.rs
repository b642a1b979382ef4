//! A CPU scheduling library.
//!
//! This library provides the process model, the ready and blocked
//! queues and the scheduling policies driven by the
//! [`processor`](../processor/index.html) tick engine.
//!

use std::num::NonZeroUsize;

mod event;
mod process;
mod queue;
mod scheduler;

pub mod schedulers;

pub use crate::event::Event;
pub use crate::process::{Pid, Process, ProcessState, ProcessTable};
pub use crate::queue::{BlockedQueue, QueueOrdering, ReadyQueue};
pub use crate::scheduler::{Policy, PolicyError, Preemption, Scheduler};

use schedulers::{Fcfs, RoundRobin, Sjf, Srtn};

/// Returns a structure that implements the `Scheduler` trait with a first come first served policy
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive shortest job first policy
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a structure that implements the `Scheduler` trait with a shortest remaining time next policy
pub fn srtn() -> impl Scheduler {
    Srtn
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `quantum` - the time that a process can run before it is preempted
///               in favour of the next ready process
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(quantum)
}

/// Returns the scheduler implementing `policy`.
pub fn for_policy(policy: Policy) -> Box<dyn Scheduler> {
    match policy {
        Policy::Fcfs => Box::new(Fcfs),
        Policy::Sjf => Box::new(Sjf),
        Policy::Srtn => Box::new(Srtn),
        Policy::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
    }
}
