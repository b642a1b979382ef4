//! Reads workload files.
//!
//! A workload is a stream of whitespace separated integers: the policy
//! identifier, the time quantum when the policy is Round Robin, then one
//! `arrival duration is_block_request` triple per record.
//!
//! ```text
//! 4 2
//! 0 4 0
//! 0 3 0
//! 1 2 1
//! ```

use std::fs;
use std::path::Path;

use scheduler::{Event, Policy, PolicyError};
use tracing::debug;

use crate::error::Error;

const ROUND_ROBIN: u64 = 4;

/// A validated workload, ready for the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub policy: Policy,
    pub events: Vec<Event>,
}

pub fn load(path: &Path) -> Result<Workload, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

pub fn parse(input: &str) -> Result<Workload, Error> {
    let mut tokens = input.split_whitespace();

    let id = tokens
        .next()
        .and_then(|token| token.parse::<u64>().ok())
        .ok_or(Error::MissingPolicy)?;
    let quantum = if id == ROUND_ROBIN {
        let quantum = tokens
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or(PolicyError::MissingQuantum)?;
        Some(quantum)
    } else {
        None
    };
    let policy = Policy::from_id(id, quantum)?;

    let fields: Vec<&str> = tokens.collect();
    let mut events = Vec::with_capacity(fields.len() / 3);
    let mut previous_arrival = 0;
    let mut total_duration: usize = 0;

    for (index, record) in fields.chunks(3).enumerate() {
        let index = index + 1;
        let &[arrival, duration, flag] = record else {
            return Err(Error::malformed(
                index,
                "truncated record, expected arrival, duration and block flag",
            ));
        };
        let arrival = number(index, arrival)?;
        let duration = number(index, duration)?;

        if arrival < previous_arrival {
            return Err(Error::malformed(
                index,
                format!("arrival time {arrival} is earlier than the previous record's {previous_arrival}"),
            ));
        }
        if duration == 0 {
            return Err(Error::malformed(index, "duration must be greater than zero"));
        }
        previous_arrival = arrival;

        // The run ends no later than the last arrival plus every duration.
        total_duration = total_duration
            .checked_add(duration)
            .filter(|total| {
                arrival
                    .checked_add(*total)
                    .and_then(|end| end.checked_add(1))
                    .is_some()
            })
            .ok_or_else(|| Error::malformed(index, "record does not fit the simulation clock"))?;

        let event = match number(index, flag)? {
            0 => Event::process(arrival, duration),
            1 => Event::block(arrival, duration),
            other => {
                return Err(Error::malformed(
                    index,
                    format!("block flag must be 0 or 1, got {other}"),
                ))
            }
        };
        events.push(event);
    }

    debug!(%policy, records = events.len(), "workload loaded");
    Ok(Workload { policy, events })
}

fn number(index: usize, token: &str) -> Result<usize, Error> {
    token
        .parse()
        .map_err(|_| Error::malformed(index, format!("`{token}` is not a non-negative integer")))
}
