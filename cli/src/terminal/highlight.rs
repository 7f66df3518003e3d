use colored::*;
use scoper_core::filter::Highlighter;

/// Green for addresses in scope, red for the rest.
pub struct ColorHighlighter;

impl Highlighter for ColorHighlighter {
    fn in_scope(&self, text: &str) -> String {
        text.green().bold().to_string()
    }

    fn out_of_scope(&self, text: &str) -> String {
        text.red().bold().to_string()
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
