/// Runtime switches resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Print every line and highlight addresses instead of filtering.
    pub color: bool,
    /// Worker threads for line filtering. `None` keeps the pool default.
    pub jobs: Option<usize>,
    /// Number of lines handed to the workers at once.
    ///
    /// Output order is preserved inside and across batches.
    pub batch_size: usize,
}

impl Config {
    pub const DEFAULT_BATCH_SIZE: usize = 1024;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: false,
            jobs: None,
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }
}
