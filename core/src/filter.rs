//! # Line Filter
//!
//! Decides what to print for each input line.
//!
//! * **Match mode**: a line is printed iff one of its addresses is in scope.
//! * **Highlight mode**: every line is printed, each address rendered by a [`Highlighter`]
//!   according to whether it is in scope.
//!
//! Lines are read in batches and processed on the rayon pool. Every worker shares the same
//! `&Scope`; output order always follows input order.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use rayon::prelude::*;
use scoper_common::network::scope::Scope;
use thiserror::Error;
use tracing::{info, warn};

use crate::finder;
use crate::input::Input;

/// Renders addresses in highlight mode.
pub trait Highlighter: Sync {
    fn in_scope(&self, text: &str) -> String;
    fn out_of_scope(&self, text: &str) -> String;
}

#[derive(Clone, Copy)]
pub enum Mode<'a> {
    Match,
    Highlight(&'a dyn Highlighter),
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Line and output counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines: usize,
    pub emitted: usize,
}

impl std::ops::AddAssign for FilterStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.emitted += other.emitted;
    }
}

pub struct LineFilter<'a> {
    scope: &'a Scope,
    mode: Mode<'a>,
    batch_size: usize,
}

impl<'a> LineFilter<'a> {
    pub fn new(scope: &'a Scope, mode: Mode<'a>, batch_size: usize) -> Self {
        Self {
            scope,
            mode,
            batch_size: batch_size.max(1),
        }
    }

    /// Whether any valid address in `line` is in scope.
    pub fn in_scope(&self, line: &str) -> bool {
        finder::find_addresses(line).any(|(_, addr)| self.scope.contains(addr))
    }

    /// The text to print for `line`, or `None` to drop it.
    pub fn apply<'l>(&self, line: &'l str) -> Option<Cow<'l, str>> {
        match self.mode {
            Mode::Match => self.in_scope(line).then_some(Cow::Borrowed(line)),
            Mode::Highlight(highlighter) => Some(self.highlight(line, highlighter)),
        }
    }

    fn highlight<'l>(&self, line: &'l str, highlighter: &dyn Highlighter) -> Cow<'l, str> {
        let mut out = String::new();
        let mut last = 0;

        for (candidate, addr) in finder::find_addresses(line) {
            out.push_str(&line[last..candidate.start]);
            let rendered = if self.scope.contains(addr) {
                highlighter.in_scope(candidate.text)
            } else {
                highlighter.out_of_scope(candidate.text)
            };
            out.push_str(&rendered);
            last = candidate.end;
        }

        if last == 0 {
            return Cow::Borrowed(line);
        }

        out.push_str(&line[last..]);
        Cow::Owned(out)
    }

    /// Filters every line of `reader` into `writer`.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, writer: &mut W) -> Result<FilterStats, StreamError> {
        let mut stats = FilterStats::default();
        let mut batch: Vec<String> = Vec::with_capacity(self.batch_size);

        loop {
            batch.clear();
            read_batch(&mut reader, &mut batch, self.batch_size).map_err(StreamError::Read)?;
            if batch.is_empty() {
                break;
            }

            let outputs: Vec<Option<Cow<'_, str>>> =
                batch.par_iter().map(|line| self.apply(line)).collect();

            stats.lines += batch.len();
            for output in outputs.into_iter().flatten() {
                writeln!(writer, "{output}").map_err(StreamError::Write)?;
                stats.emitted += 1;
            }
        }

        writer.flush().map_err(StreamError::Write)?;
        Ok(stats)
    }

    /// Runs every input in order.
    ///
    /// A read failure is reported and the next input is tried; a closed output ends the
    /// run quietly; any other write failure is returned.
    pub fn run_inputs<W: Write>(&self, inputs: Vec<Input>, writer: &mut W) -> anyhow::Result<FilterStats> {
        let mut total = FilterStats::default();

        for input in inputs {
            let name = input.to_string();
            match self.run(input.into_reader(), writer) {
                Ok(stats) => total += stats,
                Err(StreamError::Read(e)) => warn!("{name}: {e}"),
                Err(StreamError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                    warn!("Output closed, stopping");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!("{} of {} lines printed", total.emitted, total.lines);
        Ok(total)
    }
}

/// Reads up to `size` lines, dropping `\n` / `\r\n` and replacing invalid UTF-8.
fn read_batch<R: BufRead>(reader: &mut R, batch: &mut Vec<String>, size: usize) -> io::Result<()> {
    let mut buf = Vec::new();

    while batch.len() < size {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        batch.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use scoper_common::network::parser::parse_range;
    use scoper_common::network::scope::ScopeBuilder;
    use std::io::Cursor;

    struct Brackets;

    impl Highlighter for Brackets {
        fn in_scope(&self, text: &str) -> String {
            format!("[+{text}]")
        }

        fn out_of_scope(&self, text: &str) -> String {
            format!("[-{text}]")
        }
    }

    fn scope() -> Scope {
        ["10.0.0.0/8", "fe80::/64"]
            .iter()
            .map(|s| parse_range(s).unwrap())
            .collect::<ScopeBuilder>()
            .seal()
            .unwrap()
    }

    #[test]
    fn test_match_mode() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Match, 8);

        assert_eq!(filter.apply("hit 10.1.1.1").as_deref(), Some("hit 10.1.1.1"));
        assert_eq!(filter.apply("miss 11.1.1.1"), None);
        assert_eq!(filter.apply("second 11.1.1.1 10.0.0.1").as_deref(), Some("second 11.1.1.1 10.0.0.1"));
        assert_eq!(filter.apply("v6 fe80::1"), Some(Cow::Borrowed("v6 fe80::1")));
        assert_eq!(filter.apply("bogus 999.10.0.1"), None);
        assert_eq!(filter.apply(""), None);
    }

    #[test]
    fn test_highlight_mode() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Highlight(&Brackets), 8);

        assert_eq!(
            filter.apply("a 10.0.0.1 b 8.8.8.8 c").as_deref(),
            Some("a [+10.0.0.1] b [-8.8.8.8] c")
        );
        assert_eq!(filter.apply("plain text").as_deref(), Some("plain text"));
        assert_eq!(filter.apply("fe80::1").as_deref(), Some("[+fe80::1]"));
    }

    #[test]
    fn test_run_preserves_order_across_batches() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Match, 2);

        let input: String = (0..50)
            .map(|i| if i % 3 == 0 { format!("10.0.0.{i}\n") } else { format!("11.0.0.{i}\n") })
            .collect();
        let mut out = Vec::new();
        let stats = filter.run(Cursor::new(input), &mut out).unwrap();

        let expected: String = (0..50)
            .filter(|i| i % 3 == 0)
            .map(|i| format!("10.0.0.{i}\n"))
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(stats, FilterStats { lines: 50, emitted: 17 });
    }

    #[test]
    fn test_run_handles_crlf_and_missing_final_newline() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Match, 16);

        let mut out = Vec::new();
        filter.run(Cursor::new("a 10.0.0.1\r\nb 10.0.0.2"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a 10.0.0.1\nb 10.0.0.2\n");
    }

    struct Unreadable;

    impl io::Read for Unreadable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "disk on fire"))
        }
    }

    #[test]
    fn test_run_reports_read_failure_as_read_error() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Match, 4);

        let mut out = Vec::new();
        let result = filter.run(io::BufReader::new(Unreadable), &mut out);
        assert!(matches!(result, Err(StreamError::Read(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_tolerates_invalid_utf8() {
        let scope = scope();
        let filter = LineFilter::new(&scope, Mode::Match, 16);

        let mut out = Vec::new();
        let input: &[u8] = b"\xff 10.0.0.1\n";
        let stats = filter.run(input, &mut out).unwrap();
        assert_eq!(stats.emitted, 1);
    }
}
