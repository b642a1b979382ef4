use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

use serde::Serialize;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1 and follow the order in which
/// processes appear in the workload.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(NonZeroUsize::new(pid).expect("PIDs start from 1"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    fn slot(self) -> usize {
        self.0.get() - 1
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has not arrived yet.
    Pending,

    /// The process waits in the ready queue.
    Ready,

    /// The process occupies the CPU.
    Running,

    /// The process performs simulated I/O.
    Blocked,

    /// The process has finished.
    Terminated,
}

/// The Process Control Block (PCB) of a simulated process.
///
/// Timing fields are meaningful only once the process is terminated,
/// except `response_time` which is known from the first dispatch on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    state: ProcessState,
    arrival_time: usize,
    burst_time: usize,
    remaining_time: usize,
    blocked_time: usize,
    completion_time: usize,
    waiting_time: usize,
    turnaround_time: usize,
    response_time: Option<usize>,
}

impl Process {
    fn new(pid: Pid, arrival_time: usize, burst_time: usize) -> Self {
        Process {
            pid,
            state: ProcessState::Pending,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            blocked_time: 0,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn arrival_time(&self) -> usize {
        self.arrival_time
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }

    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    pub fn blocked_time(&self) -> usize {
        self.blocked_time
    }

    pub fn completion_time(&self) -> usize {
        self.completion_time
    }

    pub fn waiting_time(&self) -> usize {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> usize {
        self.turnaround_time
    }

    /// Time from arrival to the first dispatch, `None` while the process
    /// has never been on the CPU.
    pub fn response_time(&self) -> Option<usize> {
        self.response_time
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// The process arrived and joins the ready queue.
    pub fn admit(&mut self) {
        self.state = ProcessState::Ready;
    }

    /// The process takes the CPU at `clock`.
    pub fn dispatch(&mut self, clock: usize) {
        self.state = ProcessState::Running;
        if self.response_time.is_none() {
            self.response_time = Some(clock - self.arrival_time);
        }
    }

    /// One time unit of execution.
    pub fn execute(&mut self) {
        self.remaining_time = self.remaining_time.saturating_sub(1);
    }

    /// The process leaves the CPU but stays runnable.
    pub fn preempt(&mut self) {
        self.state = ProcessState::Ready;
    }

    pub fn block(&mut self, duration: usize) {
        self.state = ProcessState::Blocked;
        self.blocked_time = duration;
    }

    /// One time unit of simulated I/O.
    pub fn age(&mut self) {
        self.blocked_time = self.blocked_time.saturating_sub(1);
    }

    pub fn unblock(&mut self) {
        self.state = ProcessState::Ready;
    }

    pub fn complete(&mut self, clock: usize) {
        self.state = ProcessState::Terminated;
        self.completion_time = clock;
        self.turnaround_time = clock - self.arrival_time;
        self.waiting_time = self.turnaround_time.saturating_sub(self.burst_time);
    }
}

/// Every real process of a simulation run, indexed by [`Pid`].
#[derive(Clone, Debug, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    pub fn new() -> Self {
        ProcessTable::default()
    }

    /// Adds a process and returns its PID. PIDs are handed out in
    /// insertion order.
    pub fn insert(&mut self, arrival_time: usize, burst_time: usize) -> Pid {
        let pid = Pid::new(self.processes.len() + 1);
        self.processes
            .push(Process::new(pid, arrival_time, burst_time));
        pid
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(pid.slot())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Index<Pid> for ProcessTable {
    type Output = Process;

    fn index(&self, pid: Pid) -> &Process {
        &self.processes[pid.slot()]
    }
}

impl IndexMut<Pid> for ProcessTable {
    fn index_mut(&mut self, pid: Pid) -> &mut Process {
        &mut self.processes[pid.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pids_follow_insertion_order() {
        let mut table = ProcessTable::new();
        let first = table.insert(0, 5);
        let second = table.insert(1, 3);

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(table[second].burst_time(), 3);
        assert_eq!(table[second].remaining_time(), 3);
        assert!(table.get(Pid::new(3)).is_none());
    }

    #[test]
    fn response_time_is_recorded_once() {
        let mut table = ProcessTable::new();
        let pid = table.insert(2, 4);
        let process = &mut table[pid];

        process.admit();
        process.dispatch(3);
        process.preempt();
        process.dispatch(7);

        assert_eq!(process.response_time(), Some(1));
    }

    #[test]
    fn completion_derives_turnaround_and_waiting() {
        let mut table = ProcessTable::new();
        let pid = table.insert(1, 3);
        let process = &mut table[pid];

        for _ in 0..5 {
            process.execute();
        }
        process.complete(8);

        assert_eq!(process.remaining_time(), 0);
        assert!(process.is_terminated());
        assert_eq!(process.turnaround_time(), 7);
        assert_eq!(process.waiting_time(), 4);
    }
}
