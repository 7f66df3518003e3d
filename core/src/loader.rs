//! Builds the scope from declared ranges.
//!
//! Command-line ranges come first, then the range file line by line. The first invalid
//! range aborts loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, bail};
use scoper_common::network::parser::parse_range;
use scoper_common::network::range::Range;
use scoper_common::network::scope::{Scope, ScopeBuilder};
use tracing::{debug, info};

/// Collects `ranges` and the contents of `range_file` into a sealed scope.
pub fn load_scope(ranges: Vec<Range>, range_file: Option<&Path>) -> anyhow::Result<Scope> {
    let mut builder: ScopeBuilder = ranges.into_iter().collect();

    if let Some(path) = range_file {
        let count = load_range_file(path, &mut builder)?;
        debug!("Loaded {count} ranges from {}", path.display());
    }

    let scope = builder.seal()?;
    let len = scope.len();
    let unit = if len == 1 { "range" } else { "ranges" };
    info!("{len} IP {unit} in scope");

    Ok(scope)
}

/// Adds every range in the file at `path`, returning how many were added.
pub fn load_range_file(path: &Path, builder: &mut ScopeBuilder) -> anyhow::Result<usize> {
    if !path.exists() {
        bail!("no such file: {:?}", path.display().to_string());
    }

    let file = File::open(path)
        .with_context(|| format!("fail to open file: {:?}", path.display().to_string()))?;

    read_ranges(BufReader::new(file), builder)
}

/// Adds one range per non-blank line of `reader`.
pub fn read_ranges<R: BufRead>(reader: R, builder: &mut ScopeBuilder) -> anyhow::Result<usize> {
    let mut count = 0;

    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let range = parse_range(text).with_context(|| format!("invalid IP range: {text:?}"))?;
        builder.add(range);
        count += 1;
    }

    Ok(count)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
