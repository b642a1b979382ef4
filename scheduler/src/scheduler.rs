use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use serde::Serialize;
use thiserror::Error;

use crate::{Process, QueueOrdering};

/// The scheduling policy selected for a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First Come First Served.
    Fcfs,

    /// Non-preemptive Shortest Job First.
    Sjf,

    /// Shortest Remaining Time Next, the preemptive Shortest Job First.
    Srtn,

    /// Round Robin with a fixed time quantum.
    RoundRobin { quantum: NonZeroUsize },
}

/// Why a policy identifier could not be turned into a [`Policy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("invalid scheduling policy {0}, expected 1 (FCFS), 2 (SJF), 3 (SRTN) or 4 (RR)")]
    Unknown(u64),

    #[error("round robin requires a time quantum")]
    MissingQuantum,

    #[error("round robin time quantum must be greater than zero")]
    ZeroQuantum,
}

impl Policy {
    /// Maps the numeric identifier used by workload files.
    ///
    /// * `id` - `1` FCFS, `2` SJF, `3` SRTN, `4` Round Robin
    /// * `quantum` - the time quantum, only read for Round Robin
    pub fn from_id(id: u64, quantum: Option<usize>) -> Result<Policy, PolicyError> {
        match id {
            1 => Ok(Policy::Fcfs),
            2 => Ok(Policy::Sjf),
            3 => Ok(Policy::Srtn),
            4 => {
                let quantum = quantum.ok_or(PolicyError::MissingQuantum)?;
                let quantum = NonZeroUsize::new(quantum).ok_or(PolicyError::ZeroQuantum)?;
                Ok(Policy::RoundRobin { quantum })
            }
            other => Err(PolicyError::Unknown(other)),
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Policy::Fcfs => 1,
            Policy::Sjf => 2,
            Policy::Srtn => 3,
            Policy::RoundRobin { .. } => 4,
        }
    }

    pub fn quantum(&self) -> Option<NonZeroUsize> {
        match *self {
            Policy::RoundRobin { quantum } => Some(quantum),
            _ => None,
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "First Come First Serve (FCFS) Scheduling Policy"),
            Policy::Sjf => write!(f, "Shortest Job First (SJF) Scheduling Policy"),
            Policy::Srtn => write!(f, "Preemptive Shortest Job First (SRTN) Scheduling Policy"),
            Policy::RoundRobin { quantum } => {
                write!(f, "Round Robin Scheduling Policy with Time Quantum of {quantum}")
            }
        }
    }
}

/// When the running process may lose the CPU before it finishes or blocks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Preemption {
    /// The running process keeps the CPU.
    Never,

    /// The running process is moved to the back of the ready queue once
    /// it has used the quantum and another process is ready.
    Quantum(NonZeroUsize),

    /// A newly arrived or unblocked process takes the CPU if its remaining
    /// time is strictly smaller.
    ShorterRemaining,
}

impl Preemption {
    /// Whether `candidate`, the new head of the ready queue, takes the CPU
    /// away from `running`.
    pub fn preempts(&self, running: &Process, candidate: &Process) -> bool {
        match self {
            Preemption::ShorterRemaining => candidate.remaining_time() < running.remaining_time(),
            Preemption::Never | Preemption::Quantum(_) => false,
        }
    }
}

/// The trait that any scheduling policy has to implement.
///
/// A policy is a pair of strategies: how the ready queue is ordered and
/// when the running process is preempted. The tick loop itself is shared.
pub trait Scheduler: Send {
    /// The policy implemented.
    fn policy(&self) -> Policy;

    /// The ordering of the ready queue.
    fn ordering(&self) -> QueueOrdering;

    /// The preemption rule.
    fn preemption(&self) -> Preemption {
        Preemption::Never
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn policy(&self) -> Policy {
        (**self).policy()
    }

    fn ordering(&self) -> QueueOrdering {
        (**self).ordering()
    }

    fn preemption(&self) -> Preemption {
        (**self).preemption()
    }
}
