use std::env;
use std::fs;

use processor::{Outcome, Processor};
use scheduler::Pid;

use crate::loader;

mod round_robin;
mod sjf;

fn report_path(folder: &str, name: &str) -> String {
    format!("{}/../outputs/{folder}/{name}.txt", env!("CARGO_MANIFEST_DIR"))
}

fn write_report(folder: &str, name: &str, report: &str) {
    fs::create_dir_all(format!("{}/../outputs/{folder}", env!("CARGO_MANIFEST_DIR"))).unwrap();
    fs::write(report_path(folder, name), report).unwrap();
}

fn read_report(folder: &str, name: &str) -> String {
    fs::read_to_string(report_path(folder, name)).unwrap()
}

/// Loads a workload written in the input file format and simulates it.
fn simulate(input: &str) -> Outcome {
    let workload = loader::parse(input).unwrap();
    Processor::run(scheduler::for_policy(workload.policy), &workload.events)
}

/// Compares the report of `outcome` with the reference report stored
/// under `outputs/`. Set `WRITE_OUTPUT` to regenerate the reference.
fn run(folder: &str, name: &str, outcome: &Outcome) {
    let output = outcome.report().to_string();

    if env::var("WRITE_OUTPUT").is_ok() {
        write_report(folder, name, &output);
    } else {
        let reference = read_report(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

/// (completion, waiting, turnaround) of a process.
fn metrics(outcome: &Outcome, pid: usize) -> (usize, usize, usize) {
    let process = &outcome.table[Pid::new(pid)];
    (
        process.completion_time(),
        process.waiting_time(),
        process.turnaround_time(),
    )
}
