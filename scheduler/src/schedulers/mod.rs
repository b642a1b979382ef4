//! The scheduling policies.
//!
//! Each policy is a small strategy object that tells the
//! processor how to order the ready queue and when to preempt.
mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod srtn;
pub use srtn::Srtn;

mod round_robin;
pub use round_robin::RoundRobin;
