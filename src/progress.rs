/// Lightweight progress reporting used by the study-sheet run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of experiments to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called before an experiment is fetched (`index` is 1-based).
    fn item_started(&mut self, _index: usize, _id: &str) {}

    /// One experiment processed; `rows` may be zero after filtering.
    fn item_done(&mut self, _id: &str, _rows: usize) {}

    /// One experiment skipped because it could not be fetched or read.
    fn item_failed(&mut self, _id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Plain-text progress for terminals.
pub struct PrintProgress {
    total: usize,
}

impl PrintProgress {
    pub fn new() -> Self {
        Self { total: 0 }
    }
}

impl Default for PrintProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_started(&mut self, index: usize, id: &str) {
        println!("Processing experiment {}/{}: {}", index, self.total, id);
    }
    fn item_failed(&mut self, id: &str, reason: &str) {
        println!("Skipped {id}: {reason}");
    }
}
