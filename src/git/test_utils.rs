//! Shared test utilities for the `git` module.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::runner::{CommandRunner, GitOutput};

/// Mock runner with pre-programmed queues of results.
///
/// `output` results and `status` exit codes are returned in FIFO order from
/// separate queues. When a queue is exhausted, calls fail with
/// `Err("no more mock ...")`. Every call records its argument list.
#[derive(Clone, Default)]
pub(crate) struct MockRunner {
    outputs: Arc<Mutex<VecDeque<GitOutput>>>,
    statuses: Arc<Mutex<VecDeque<i32>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockRunner {
    /// Creates a runner answering `output` calls with `outputs`.
    pub(crate) fn new(outputs: Vec<GitOutput>) -> Self {
        Self {
            outputs: Arc::new(Mutex::new(outputs.into())),
            ..Self::default()
        }
    }

    /// Answers `status` calls with `codes`.
    pub(crate) fn with_status(self, codes: Vec<i32>) -> Self {
        *self.statuses.lock().unwrap() = codes.into();
        self
    }

    /// Argument lists of every call so far, in order.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, args: &[&str]) {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(ToString::to_string).collect());
    }
}

impl CommandRunner for MockRunner {
    fn output(&self, args: &[&str]) -> Result<GitOutput> {
        self.record(args);
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no more mock outputs"))
    }

    fn status(&self, args: &[&str]) -> Result<i32> {
        self.record(args);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no more mock statuses"))
    }
}
