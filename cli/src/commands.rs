use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use scoper_common::config::Config;
use scoper_common::network::range::Range;

#[derive(Parser)]
#[command(name = "scoper")]
#[command(about = "Filters lines containing IP addresses from scope.")]
pub struct CommandLine {
    /// IP range, may be repeated.
    ///
    /// Examples:
    /// - 192.168.1.1
    /// - 192.168.1.0/22
    /// - 192.168.1.0_192.168.2.254
    /// - 192.168.1-2,5.0-255
    /// - fe80::1:2:3:4
    /// - fe80::1:2:3:4/64
    /// - fe80::1:2:3:4_fe80::1:2:3:50
    /// - fe80::1:2:3:1,2,4-a
    #[arg(short = 'r', long = "range", value_name = "RANGE", verbatim_doc_comment)]
    pub ranges: Vec<Range>,

    /// Path to file with IP ranges on each line
    #[arg(short = 'R', long = "range-file", value_name = "PATH")]
    pub range_file: Option<PathBuf>,

    /// Color mode: print all lines, but highlight in scope IP addresses with green and rest with red
    #[arg(short = 'c', long = "color")]
    pub color: bool,

    /// Worker threads used to filter lines
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input files. Stdin is read first when it is not a terminal.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            color: self.color,
            jobs: self.jobs.map(NonZeroUsize::get),
            ..Config::default()
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
