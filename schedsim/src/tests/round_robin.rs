use function_name::named;
use pretty_assertions::assert_eq;
use processor::Slice;
use scheduler::Pid;

use super::{metrics, run, simulate};

#[test]
#[named]
pub fn two_processes_quantum_two() {
    let outcome = simulate("4 2\n0 4 0\n0 3 0\n");

    assert_eq!(
        outcome.timeline(),
        vec![
            Slice::new(1, 0, 2),
            Slice::new(2, 2, 4),
            Slice::new(1, 4, 6),
            Slice::new(2, 6, 7)
        ]
    );
    assert_eq!(metrics(&outcome, 1), (6, 2, 6));
    assert_eq!(metrics(&outcome, 2), (7, 4, 7));
    assert_eq!(outcome.table[Pid::new(1)].response_time(), Some(0));
    assert_eq!(outcome.table[Pid::new(2)].response_time(), Some(2));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &outcome,
    );
}

#[test]
#[named]
pub fn arrival_queues_ahead_of_expired_process() {
    let outcome = simulate("4 2\n0 5 0\n1 3 0\n2 1 0\n");

    assert_eq!(
        outcome.timeline(),
        vec![
            Slice::new(1, 0, 2),
            Slice::new(2, 2, 4),
            Slice::new(3, 4, 5),
            Slice::new(1, 5, 7),
            Slice::new(2, 7, 8),
            Slice::new(1, 8, 9)
        ]
    );

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &outcome,
    );
}

#[test]
pub fn quantum_of_one_alternates_every_tick() {
    let outcome = simulate("4 1\n0 2 0\n0 2 0\n");

    assert_eq!(
        outcome.timeline(),
        vec![
            Slice::new(1, 0, 1),
            Slice::new(2, 1, 2),
            Slice::new(1, 2, 3),
            Slice::new(2, 3, 4)
        ]
    );
}
