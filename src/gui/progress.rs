// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Status line + message list for the dashboard.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    messages: Vec<String>,
    done: usize,
    total: usize,
    rows: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, messages: Vec::new(), done: 0, total: 0, rows: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }

    /// Messages worth keeping on screen after the run (errors, skips).
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
        self.messages.push(s!(msg));
    }
    fn item_started(&mut self, index: usize, id: &str) {
        self.set_status(format!("Processing experiment {}/{}: {}", index, self.total, id));
    }
    fn item_done(&mut self, _id: &str, rows: usize) {
        self.done += 1;
        self.rows += rows;
    }
    fn item_failed(&mut self, id: &str, reason: &str) {
        self.done += 1;
        self.messages.push(format!("Unexpected error processing {id}: {reason}"));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete"));
        } else {
            self.set_status(format!(
                "Fetch complete ({}/{} experiments, {} scans)",
                self.done, self.total, self.rows
            ));
        }
    }
}
