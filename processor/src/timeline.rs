use scheduler::Pid;

use crate::{Log, Transition};

/// A contiguous stretch of CPU time given to one process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    /// First tick of the slice.
    pub start: usize,
    /// Tick at which the process left the CPU.
    pub end: usize,
}

impl Slice {
    pub fn new(pid: usize, start: usize, end: usize) -> Slice {
        Slice {
            pid: Pid::new(pid),
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Rebuilds the CPU schedule from the processor logs.
///
/// A process that is dispatched and preempted within the same tick never
/// executed, such empty slices are left out.
pub fn timeline(logs: &[Log]) -> Vec<Slice> {
    let mut slices = vec![];
    let mut open: Option<(Pid, usize)> = None;

    for log in logs {
        for transition in &log.transitions {
            match *transition {
                Transition::Dispatched(pid) => open = Some((pid, log.clock)),
                Transition::Preempted(pid)
                | Transition::Expired(pid)
                | Transition::Completed(pid)
                | Transition::Blocked { pid, .. } => {
                    if let Some((running, start)) = open {
                        if running == pid {
                            let slice = Slice {
                                pid,
                                start,
                                end: log.clock,
                            };
                            if !slice.is_empty() {
                                slices.push(slice);
                            }
                            open = None;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    slices
}
