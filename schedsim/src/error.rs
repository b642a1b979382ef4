use std::io;
use std::path::PathBuf;

use scheduler::PolicyError;
use thiserror::Error;

/// Everything that stops a simulation from running or its report from
/// being written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read input file {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    InvalidPolicy(#[from] PolicyError),

    #[error("input does not start with a scheduling policy")]
    MissingPolicy,

    #[error("malformed event record {index}: {reason}")]
    MalformedEvent { index: usize, reason: String },

    #[error("unable to write report to {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Error {
        Error::MalformedEvent {
            index,
            reason: reason.into(),
        }
    }
}
