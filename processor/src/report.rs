use std::fmt::{self, Display};

use scheduler::{Pid, Policy, Process, ProcessTable};
use serde::Serialize;

/// The final metrics of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    pub pid: Pid,
    pub arrival: usize,
    pub burst: usize,
    pub completion: usize,
    pub waiting: usize,
    pub turnaround: usize,
    /// Only set once the process has been dispatched.
    pub response: Option<usize>,
}

impl From<&Process> for ProcessReport {
    fn from(process: &Process) -> Self {
        ProcessReport {
            pid: process.pid(),
            arrival: process.arrival_time(),
            burst: process.burst_time(),
            completion: process.completion_time(),
            waiting: process.waiting_time(),
            turnaround: process.turnaround_time(),
            response: process.response_time(),
        }
    }
}

/// The metrics of a finished simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub policy: Policy,
    pub processes: Vec<ProcessReport>,
    /// `None` when the run had no process.
    pub average_waiting: Option<f64>,
    /// `None` when the run had no process.
    pub average_turnaround: Option<f64>,
}

fn average<I>(values: I) -> Option<f64>
where
    I: ExactSizeIterator<Item = usize>,
{
    let count = values.len();
    if count == 0 {
        return None;
    }
    let total: usize = values.sum();
    Some(total as f64 / count as f64)
}

impl Report {
    pub fn new(policy: Policy, table: &ProcessTable) -> Report {
        let processes: Vec<ProcessReport> = table.iter().map(ProcessReport::from).collect();
        let average_waiting = average(processes.iter().map(|process| process.waiting));
        let average_turnaround = average(processes.iter().map(|process| process.turnaround));
        Report {
            policy,
            processes,
            average_waiting,
            average_turnaround,
        }
    }

    fn shows_response(&self) -> bool {
        self.policy.quantum().is_some()
    }
}

struct Average(Option<f64>);

impl Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.2}"),
            None => write!(f, "n/a"),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.policy)?;
        write!(
            f,
            "Process Id    Arrival Time    Burst Time    Completion Time    Waiting Time    Turn Around Time"
        )?;
        if self.shows_response() {
            write!(f, "   Response Time")?;
        }
        writeln!(f)?;

        for process in &self.processes {
            write!(
                f,
                "{:6}{:15}{:14}{:18}{:17}{:18}",
                process.pid.get(),
                process.arrival,
                process.burst,
                process.completion,
                process.waiting,
                process.turnaround
            )?;
            if self.shows_response() {
                write!(f, "{:22}", process.response.unwrap_or_default())?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Average Waiting Time: {}", Average(self.average_waiting))?;
        writeln!(
            f,
            "Average Turn Around Time: {}",
            Average(self.average_turnaround)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_run_has_no_averages() {
        let report = Report::new(Policy::Fcfs, &ProcessTable::new());

        assert_eq!(report.average_waiting, None);
        assert_eq!(report.average_turnaround, None);
        assert_eq!(
            report.to_string(),
            "First Come First Serve (FCFS) Scheduling Policy\n\n\
             Process Id    Arrival Time    Burst Time    Completion Time    Waiting Time    Turn Around Time\n\
             \n\
             Average Waiting Time: n/a\n\
             Average Turn Around Time: n/a\n"
        );
    }

    #[test]
    fn averages_cover_every_process() {
        let mut table = ProcessTable::new();
        let first = table.insert(0, 2);
        let second = table.insert(0, 3);
        table[first].complete(2);
        table[second].complete(5);

        let report = Report::new(Policy::Sjf, &table);

        assert_eq!(report.processes[1].waiting, 2);
        assert_eq!(report.average_waiting, Some(1.0));
        assert_eq!(report.average_turnaround, Some(3.5));
    }
}
