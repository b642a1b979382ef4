use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the report is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Fixed-width table.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "schedsim")]
#[command(about = "Simulates FCFS, SJF, SRTN and Round Robin CPU scheduling over a workload file")]
#[command(version)]
pub struct Config {
    /// Workload file: the policy (1 FCFS, 2 SJF, 3 SRTN, 4 RR), the quantum
    /// for RR, then one `arrival duration is_block_request` triple per record
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Where to write the report, `-` for stdout
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the tick by tick trace on stdout
    #[arg(long)]
    pub trace: bool,
}

impl Config {
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
