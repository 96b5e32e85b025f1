// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/pipeline).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One logical unit completed (a player fetched, a category projected).
    fn item_done(&mut self, _name: &str) {}

    /// One logical unit was skipped.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints to stdout; used by the CLI.
pub struct PrintProgress {
    total: usize,
    done: usize,
}

impl PrintProgress {
    pub fn new() -> Self { Self { total: 0, done: 0 } }
}

impl Default for PrintProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        if self.total > 0 {
            println!("[{}/{}] {}", self.done, self.total, name);
        } else {
            println!("{name}");
        }
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.done += 1;
        println!("skip {name}: {reason}");
    }
}
