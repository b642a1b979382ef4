use std::fmt::{self, Display};

use scheduler::Pid;

/// A state change that happened during a tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The process arrived and joined the ready queue.
    Arrived(Pid),

    /// The process took the CPU.
    Dispatched(Pid),

    /// The process lost the CPU to a process with less remaining time.
    Preempted(Pid),

    /// The process used its whole quantum and went back to the ready queue.
    Expired(Pid),

    /// The process was interrupted for I/O.
    Blocked { pid: Pid, duration: usize },

    /// The process finished its I/O and joined the ready queue.
    Unblocked(Pid),

    /// The process finished.
    Completed(Pid),

    /// A block request arrived while no process was running.
    BlockDropped { duration: usize },

    /// Nothing to do, the clock jumped to the next arrival.
    Idle { until: usize },
}

impl Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Arrived(pid) => write!(f, "ARRIVED {pid}"),
            Transition::Dispatched(pid) => write!(f, "DISPATCHED {pid}"),
            Transition::Preempted(pid) => write!(f, "PREEMPTED {pid}"),
            Transition::Expired(pid) => write!(f, "EXPIRED {pid}"),
            Transition::Blocked { pid, duration } => write!(f, "BLOCKED {pid} for {duration}"),
            Transition::Unblocked(pid) => write!(f, "UNBLOCKED {pid}"),
            Transition::Completed(pid) => write!(f, "COMPLETED {pid}"),
            Transition::BlockDropped { duration } => {
                write!(f, "DROPPED block request of {duration}, cpu idle")
            }
            Transition::Idle { until } => write!(f, "IDLE until {until}"),
        }
    }
}

/// Running iteration log
///
/// One entry is kept for every tick in which at least one
/// [`Transition`] happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    /// The tick.
    pub clock: usize,

    /// The process on the CPU when the tick ended.
    pub running: Option<Pid>,

    /// The state changes, in the order they happened.
    pub transitions: Vec<Transition>,
}

impl Log {
    pub(crate) fn new(clock: usize) -> Log {
        Log {
            clock,
            running: None,
            transitions: vec![],
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for transition in &self.transitions {
            writeln!(f, "{transition}")?;
        }
        match self.running {
            Some(pid) => writeln!(f, "CPU: {pid}"),
            None => writeln!(f, "CPU: idle"),
        }
    }
}

/// Format the [`Processor`](crate::Processor)'s logs to a [`String`].
///
/// * `logs` - the logs returned with the [`Outcome`](crate::Outcome).
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for log in logs {
        // writing to a String cannot fail
        let _ = fmt::write(
            &mut s,
            format_args!("===== Tick: {} =====\n{}\n", log.clock, log),
        );
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_ticks_with_headers() {
        let logs = vec![
            Log {
                clock: 0,
                running: Some(Pid::new(1)),
                transitions: vec![
                    Transition::Arrived(Pid::new(1)),
                    Transition::Dispatched(Pid::new(1)),
                ],
            },
            Log {
                clock: 2,
                running: None,
                transitions: vec![Transition::Blocked {
                    pid: Pid::new(1),
                    duration: 3,
                }],
            },
        ];

        assert_eq!(
            format_logs(&logs),
            "===== Tick: 0 =====\nARRIVED 1\nDISPATCHED 1\nCPU: 1\n\n\
             ===== Tick: 2 =====\nBLOCKED 1 for 3\nCPU: idle\n\n"
        );
    }
}
