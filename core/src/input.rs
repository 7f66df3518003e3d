//! Input sources for line filtering: stdin (when piped) followed by files, in order.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::debug;

#[derive(Debug)]
pub enum Input {
    Stdin,
    File { path: PathBuf, reader: BufReader<File> },
}

impl Input {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            bail!("no such file: {:?}", path.display().to_string());
        }

        let file = File::open(path)
            .with_context(|| format!("fail to open file: {:?}", path.display().to_string()))?;

        Ok(Self::File {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    pub fn into_reader(self) -> Box<dyn BufRead> {
        match self {
            Self::Stdin => Box::new(io::stdin().lock()),
            Self::File { reader, .. } => Box::new(reader),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

/// Opens every input up front so a missing file fails before any output is produced.
pub fn open_inputs(paths: &[PathBuf], read_stdin: bool) -> anyhow::Result<Vec<Input>> {
    let mut inputs = Vec::with_capacity(paths.len() + usize::from(read_stdin));

    if read_stdin {
        inputs.push(Input::Stdin);
    }

    for path in paths {
        inputs.push(Input::open(path)?);
    }

    if inputs.is_empty() {
        bail!("no inputs");
    }

    debug!("Reading from {} inputs", inputs.len());
    Ok(inputs)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
