mod commands;
mod terminal;

use std::io::{self, BufWriter, IsTerminal};

use commands::CommandLine;
use scoper_core::filter::{LineFilter, Mode};
use scoper_core::{input, loader};
use terminal::highlight::ColorHighlighter;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    let cfg = commands.config();
    if let Some(jobs) = cfg.jobs {
        rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global()?;
    }

    let scope = loader::load_scope(commands.ranges, commands.range_file.as_deref())?;
    let inputs = input::open_inputs(&commands.files, !io::stdin().is_terminal())?;

    let highlighter = ColorHighlighter;
    let mode = if cfg.color { Mode::Highlight(&highlighter) } else { Mode::Match };
    let filter = LineFilter::new(&scope, mode, cfg.batch_size);

    let mut out = BufWriter::new(io::stdout().lock());
    filter.run_inputs(inputs, &mut out)?;

    Ok(())
}
