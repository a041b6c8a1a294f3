//! Extraction options.

use std::time::{Duration, Instant};

/// Options for a single extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Soft per-document time budget. Checked between pages; when it
    /// expires, remaining pages are skipped and the partial result is
    /// returned with `error` set.
    pub deadline: Option<Duration>,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, budget: Duration) -> Self {
        self.deadline = Some(budget);
        self
    }
}

/// Running deadline for one extraction call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    pub(crate) fn start(options: &ExtractOptions) -> Self {
        Self {
            started: Instant::now(),
            budget: options.deadline,
        }
    }

    pub(crate) fn expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.started.elapsed() >= budget,
            None => false,
        }
    }
}
