use serde::{Deserialize, Serialize};

/// Statistics about one normalization run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of source files processed
    pub files: usize,

    /// Number of include lines rewritten
    pub includes_rewritten: usize,

    /// Number of headers recorded in the index
    pub headers: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, rewritten: usize) {
        self.files += 1;
        self.includes_rewritten += rewritten;
    }
}
