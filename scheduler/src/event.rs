/// One record of the workload, as delivered by the input loader.
///
/// The loader guarantees that records reach the engine ordered by
/// non-decreasing arrival time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    /// A process becomes eligible to run at `arrival` and needs
    /// `burst` time units of CPU.
    Process {
        /// The tick at which the process arrives.
        arrival: usize,
        /// The total CPU time the process requires.
        burst: usize,
    },

    /// The process running at `arrival` is interrupted and performs
    /// simulated I/O for `duration` time units.
    BlockRequest {
        /// The tick at which the running process is interrupted.
        arrival: usize,
        /// How long the interrupted process stays blocked.
        duration: usize,
    },
}

impl Event {
    pub fn process(arrival: usize, burst: usize) -> Event {
        Event::Process { arrival, burst }
    }

    pub fn block(arrival: usize, duration: usize) -> Event {
        Event::BlockRequest { arrival, duration }
    }

    /// The tick at which the record takes effect.
    pub fn arrival(&self) -> usize {
        match *self {
            Event::Process { arrival, .. } | Event::BlockRequest { arrival, .. } => arrival,
        }
    }
}
