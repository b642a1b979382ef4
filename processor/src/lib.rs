//! A processor simulation library
//!
//! This is used for simulating the policies from the [`scheduler`] crate
//! over a known workload. The [`Processor`] advances a logical clock one
//! tick at a time and resolves every event of a tick in a fixed order:
//!
//! 1. the running process executes one time unit (and uses one unit of
//!    its quantum under Round Robin),
//! 2. every blocked process counts down one unit of I/O,
//! 3. if there is nothing to run, wait or unblock, the clock jumps to the
//!    next arrival,
//! 4. the workload records due at this tick are applied in order,
//! 5. a running process without remaining time completes,
//! 6. an idle CPU takes the head of the ready queue,
//! 7. a running process that used up its quantum is rotated out,
//! 8. processes that finished their I/O rejoin the ready queue and an
//!    idle CPU takes the head again,
//! 9. the clock advances.
//!
//! The same workload and policy always produce the same schedule.

use std::collections::VecDeque;

use scheduler::{
    BlockedQueue, Event, Pid, Policy, Preemption, ProcessTable, ReadyQueue, Scheduler,
};
use tracing::{debug, info, warn};

mod log;
mod report;
mod timeline;

pub use crate::log::{format_logs, Log, Transition};
pub use crate::report::{ProcessReport, Report};
pub use crate::timeline::{timeline, Slice};

/// A workload record waiting for its arrival tick.
#[derive(Debug, Copy, Clone)]
enum Pending {
    Arrival { at: usize, pid: Pid },
    Block { at: usize, duration: usize },
}

impl Pending {
    fn at(&self) -> usize {
        match *self {
            Pending::Arrival { at, .. } | Pending::Block { at, .. } => at,
        }
    }
}

/// The result of a simulation run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The policy that was simulated.
    pub policy: Policy,

    /// Every process, all of them terminated.
    pub table: ProcessTable,

    /// The tick by tick state changes.
    pub logs: Vec<Log>,
}

impl Outcome {
    pub fn report(&self) -> Report {
        Report::new(self.policy, &self.table)
    }

    pub fn timeline(&self) -> Vec<Slice> {
        timeline(&self.logs)
    }
}

/// The processor simulator.
pub struct Processor<S: Scheduler> {
    scheduler: S,
    preemption: Preemption,
    clock: usize,
    running: Option<Pid>,
    quantum_remaining: usize,
    table: ProcessTable,
    ready: ReadyQueue,
    blocked: BlockedQueue,
    pending: VecDeque<Pending>,
    logs: Vec<Log>,
    current: Log,
}

impl<S: Scheduler> Processor<S> {
    /// Runs a simulation to completion.
    ///
    /// * `scheduler` - the policy to simulate.
    /// * `events` - the workload, expected in non-decreasing arrival order.
    ///   An unordered workload is sorted by arrival first, keeping the
    ///   relative order of records that share a tick. PIDs still follow
    ///   the order of `events`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::Event;
    ///
    /// let outcome = Processor::run(scheduler::fcfs(), &[
    ///     Event::process(0, 5),
    ///     Event::process(1, 3),
    /// ]);
    ///
    /// let report = outcome.report();
    /// assert_eq!(report.processes[1].completion, 8);
    /// assert_eq!(report.average_waiting, Some(2.0));
    /// ```
    pub fn run(scheduler: S, events: &[Event]) -> Outcome {
        let mut table = ProcessTable::new();
        let mut pending: Vec<Pending> = events
            .iter()
            .map(|event| match *event {
                Event::Process { arrival, burst } => Pending::Arrival {
                    at: arrival,
                    pid: table.insert(arrival, burst),
                },
                Event::BlockRequest { arrival, duration } => Pending::Block {
                    at: arrival,
                    duration,
                },
            })
            .collect();
        if !events.windows(2).all(|pair| pair[0].arrival() <= pair[1].arrival()) {
            warn!("workload is not ordered by arrival time, sorting it");
            pending.sort_by_key(Pending::at);
        }

        let mut processor = Processor {
            preemption: scheduler.preemption(),
            ready: ReadyQueue::new(scheduler.ordering()),
            scheduler,
            clock: 0,
            running: None,
            quantum_remaining: 0,
            table,
            blocked: BlockedQueue::new(),
            pending: pending.into(),
            logs: vec![],
            current: Log::new(0),
        };

        info!("Executing {}", processor.scheduler.policy());
        while processor.has_work() {
            processor.tick();
        }

        Outcome {
            policy: processor.scheduler.policy(),
            table: processor.table,
            logs: processor.logs,
        }
    }

    fn has_work(&self) -> bool {
        !self.pending.is_empty()
            || self.running.is_some()
            || !self.ready.is_empty()
            || !self.blocked.is_empty()
    }

    fn tick(&mut self) {
        if let Some(pid) = self.running {
            self.table[pid].execute();
            self.quantum_remaining = self.quantum_remaining.saturating_sub(1);
        }

        self.blocked.age_all(&mut self.table);

        self.skip_idle();
        self.current = Log::new(self.clock);

        while let Some(event) = self.next_due() {
            match event {
                Pending::Arrival { pid, .. } => self.arrive(pid),
                Pending::Block { duration, .. } => self.interrupt(duration),
            }
        }

        self.complete_finished();
        self.dispatch_if_idle();
        self.expire_quantum();

        for pid in self.blocked.release_ready(&self.table) {
            info!("Process {} was unblocked at {}!", pid, self.clock);
            self.table[pid].unblock();
            self.record(Transition::Unblocked(pid));
            self.ready.enqueue(pid, &self.table);
            self.check_preemption();
        }
        self.dispatch_if_idle();

        self.flush_log();
        self.clock += 1;
    }

    /// Moves the clock to the next arrival when nothing can happen before.
    fn skip_idle(&mut self) {
        if self.running.is_some() || !self.ready.is_empty() || !self.blocked.is_empty() {
            return;
        }
        let Some(next) = self.pending.front().map(Pending::at) else {
            return;
        };
        if next > self.clock {
            debug!(from = self.clock, until = next, "cpu idle");
            self.current = Log::new(self.clock);
            self.record(Transition::Idle { until: next });
            self.flush_log();
            self.clock = next;
        }
    }

    fn next_due(&mut self) -> Option<Pending> {
        if self.pending.front().map(Pending::at) == Some(self.clock) {
            self.pending.pop_front()
        } else {
            None
        }
    }

    fn arrive(&mut self, pid: Pid) {
        debug!(pid = pid.get(), clock = self.clock, "arrived");
        self.table[pid].admit();
        self.record(Transition::Arrived(pid));
        self.ready.enqueue(pid, &self.table);
        self.check_preemption();
    }

    /// Applies a block request to the running process.
    fn interrupt(&mut self, duration: usize) {
        let Some(pid) = self.running else {
            debug!(clock = self.clock, duration, "block request while cpu idle");
            self.record(Transition::BlockDropped { duration });
            return;
        };

        if self.table[pid].remaining_time() == 0 {
            self.complete(pid);
        } else {
            info!("Process {} was blocked at {}!", pid, self.clock);
            self.running = None;
            self.table[pid].block(duration);
            self.blocked.block(pid, &self.table);
            self.record(Transition::Blocked { pid, duration });
        }
        self.dispatch_if_idle();
    }

    fn complete_finished(&mut self) {
        if let Some(pid) = self.running {
            if self.table[pid].remaining_time() == 0 {
                self.complete(pid);
            }
        }
    }

    fn complete(&mut self, pid: Pid) {
        info!("Process {} completed at {}", pid, self.clock);
        self.table[pid].complete(self.clock);
        self.running = None;
        self.record(Transition::Completed(pid));
    }

    fn dispatch_if_idle(&mut self) {
        if self.running.is_none() {
            if let Some(pid) = self.ready.dequeue_front() {
                self.dispatch(pid);
            }
        }
    }

    fn dispatch(&mut self, pid: Pid) {
        debug!(pid = pid.get(), clock = self.clock, "dispatched");
        self.table[pid].dispatch(self.clock);
        self.running = Some(pid);
        if let Preemption::Quantum(quantum) = self.preemption {
            self.quantum_remaining = quantum.get();
        }
        self.record(Transition::Dispatched(pid));
    }

    /// Hands the CPU to the ready queue head if the policy says it is
    /// more deserving than the running process.
    fn check_preemption(&mut self) {
        let (Some(running), Some(head)) = (self.running, self.ready.peek_front()) else {
            return;
        };
        if !self.preemption.preempts(&self.table[running], &self.table[head]) {
            return;
        }

        debug!(
            pid = running.get(),
            by = head.get(),
            clock = self.clock,
            "preempted"
        );
        self.table[running].preempt();
        self.record(Transition::Preempted(running));
        self.ready.enqueue(running, &self.table);
        self.running = None;
        self.dispatch_if_idle();
    }

    fn expire_quantum(&mut self) {
        let Preemption::Quantum(quantum) = self.preemption else {
            return;
        };
        let Some(pid) = self.running else {
            return;
        };
        if self.quantum_remaining != 0 {
            return;
        }

        if self.ready.is_empty() {
            self.quantum_remaining = quantum.get();
            return;
        }

        debug!(pid = pid.get(), clock = self.clock, "quantum expired");
        self.table[pid].preempt();
        self.record(Transition::Expired(pid));
        self.ready.enqueue(pid, &self.table);
        self.running = None;
        self.dispatch_if_idle();
    }

    fn record(&mut self, transition: Transition) {
        self.current.transitions.push(transition);
    }

    fn flush_log(&mut self) {
        if self.current.transitions.is_empty() {
            return;
        }
        let mut log = Log::new(self.clock);
        std::mem::swap(&mut log, &mut self.current);
        log.running = self.running;
        self.logs.push(log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scheduler::ProcessState;
    use std::num::NonZeroUsize;
    use tracing_test::traced_test;

    fn quantum(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn empty_workload_finishes_immediately() {
        let outcome = Processor::run(scheduler::fcfs(), &[]);

        assert!(outcome.table.is_empty());
        assert!(outcome.logs.is_empty());
        assert_eq!(outcome.report().average_waiting, None);
    }

    #[test]
    fn every_process_terminates() {
        let events = [
            Event::process(0, 3),
            Event::process(1, 2),
            Event::block(2, 2),
            Event::process(4, 1),
        ];

        let outcome = Processor::run(scheduler::round_robin(quantum(1)), &events);

        for process in outcome.table.iter() {
            assert_eq!(process.state(), ProcessState::Terminated);
            assert_eq!(process.remaining_time(), 0);
        }
    }

    #[test]
    fn idle_gap_is_skipped_and_logged() {
        let events = [Event::process(0, 2), Event::process(5, 3)];

        let outcome = Processor::run(scheduler::fcfs(), &events);

        assert_eq!(outcome.table[Pid::new(2)].completion_time(), 8);
        assert!(outcome
            .logs
            .iter()
            .any(|log| log.transitions == vec![Transition::Idle { until: 5 }]));
    }

    #[test]
    fn quantum_expiry_without_competition_keeps_running() {
        let outcome = Processor::run(scheduler::round_robin(quantum(2)), &[Event::process(0, 5)]);

        assert_eq!(outcome.timeline(), vec![Slice::new(1, 0, 5)]);
        assert!(!outcome
            .logs
            .iter()
            .flat_map(|log| &log.transitions)
            .any(|transition| matches!(transition, Transition::Expired(_))));
    }

    #[test]
    fn released_process_resumes_in_the_same_tick() {
        let events = [Event::process(0, 4), Event::block(2, 3)];

        let outcome = Processor::run(scheduler::fcfs(), &events);

        assert_eq!(
            outcome.timeline(),
            vec![Slice::new(1, 0, 2), Slice::new(1, 5, 7)]
        );
        let released = outcome.logs.iter().find(|log| log.clock == 5).unwrap();
        assert_eq!(
            released.transitions,
            vec![
                Transition::Unblocked(Pid::new(1)),
                Transition::Dispatched(Pid::new(1))
            ]
        );
        assert_eq!(released.running, Some(Pid::new(1)));
    }

    #[traced_test]
    #[test]
    fn unordered_workload_is_sorted_by_arrival() {
        let events = [Event::process(5, 1), Event::process(2, 1)];

        let outcome = Processor::run(scheduler::fcfs(), &events);

        assert_eq!(
            outcome.timeline(),
            vec![Slice::new(2, 2, 3), Slice::new(1, 5, 6)]
        );
        assert_eq!(outcome.table[Pid::new(1)].completion_time(), 6);
        assert_eq!(outcome.table[Pid::new(2)].completion_time(), 3);
        assert!(logs_contain("workload is not ordered by arrival time"));
    }

    #[traced_test]
    #[test]
    fn blocking_is_logged() {
        let events = [Event::process(0, 4), Event::block(2, 3)];

        Processor::run(scheduler::sjf(), &events);

        assert!(logs_contain("Process 1 was blocked at 2!"));
        assert!(logs_contain("Process 1 was unblocked at 5!"));
        assert!(logs_contain("Process 1 completed at 7"));
    }
}
