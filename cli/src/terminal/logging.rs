use std::io::{self, IsTerminal};

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Installs the global subscriber. Logs go to stderr so stdout only carries filtered lines.
///
/// `RUST_LOG` wins over the `-v` count when set.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .event_format(ScoperFormatter {
            ansi: io::stderr().is_terminal(),
        })
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prefixes each event with a level marker, colored only when stderr is a terminal.
pub struct ScoperFormatter {
    pub ansi: bool,
}

impl ScoperFormatter {
    fn marker(&self, level: Level) -> String {
        let symbol = level_symbol(level);
        if !self.ansi {
            return symbol.to_string();
        }

        let styled = match level {
            Level::TRACE => symbol.dimmed(),
            Level::DEBUG => symbol.blue(),
            Level::INFO => symbol.green().bold(),
            Level::WARN => symbol.yellow().bold(),
            Level::ERROR => symbol.red().bold(),
        };
        styled.to_string()
    }
}

fn level_symbol(level: Level) -> &'static str {
    match level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

impl<S, N> FormatEvent<S, N> for ScoperFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", self.marker(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
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
