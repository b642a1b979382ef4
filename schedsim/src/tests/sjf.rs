use function_name::named;
use pretty_assertions::assert_eq;
use processor::Slice;

use super::{metrics, run, simulate};

#[test]
#[named]
pub fn shortest_first() {
    let outcome = simulate("2\n0 6 0\n1 4 0\n2 2 0\n3 1 0\n");

    assert_eq!(
        outcome.timeline(),
        vec![
            Slice::new(1, 0, 6),
            Slice::new(4, 6, 7),
            Slice::new(3, 7, 9),
            Slice::new(2, 9, 13)
        ]
    );

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &outcome,
    );
}

#[test]
pub fn ties_keep_arrival_order() {
    let outcome = simulate("2\n0 3 0\n1 2 0\n1 2 0\n");

    assert_eq!(metrics(&outcome, 1), (3, 0, 3));
    assert_eq!(metrics(&outcome, 2), (5, 2, 4));
    assert_eq!(metrics(&outcome, 3), (7, 4, 6));
}

#[test]
pub fn shorter_arrival_does_not_preempt() {
    let outcome = simulate("2\n0 5 0\n1 1 0\n");

    assert_eq!(
        outcome.timeline(),
        vec![Slice::new(1, 0, 5), Slice::new(2, 5, 6)]
    );
}
