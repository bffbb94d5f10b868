use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Terminal state reported for one worker task execution.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "KILLED")]
    Killed,
    #[serde(rename = "CP")]
    Checkpoint,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// CSS class drawn for bars in this status. Statuses outside the known
    /// set render without a class rather than failing the record.
    pub fn bar_class(self) -> Option<&'static str> {
        match self {
            TaskStatus::Succeeded => Some("bar"),
            TaskStatus::Failed => Some("bar-failed"),
            TaskStatus::Running => Some("bar-running"),
            TaskStatus::Killed => Some("bar-killed"),
            TaskStatus::Checkpoint => Some("bar-cp"),
            TaskStatus::Unknown => None,
        }
    }
}

/// One worker task's execution span.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Worker {
    #[serde(rename = "loadid")]
    pub load_id: u32,
    #[serde(rename = "wrkrid")]
    pub worker_id: u32,
    #[serde(rename = "taskName")]
    pub task_name: u32,
    pub fcp: bool,
    pub rcp: bool,
    #[serde(rename = "startdttm")]
    pub start: DateTime<Utc>,
    #[serde(rename = "enddttm")]
    pub end: DateTime<Utc>,
    #[serde(rename = "stepname")]
    pub step_name: String,
    pub status: TaskStatus,
}

impl Worker {
    /// Content-derived key for list reconciliation. Stable across reorders,
    /// unlike a positional index.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.worker_id,
            self.step_name,
            self.start.timestamp_millis()
        )
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct WorkerFile {
    pub workers: Vec<Worker>,
}

impl WorkerFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Calculate the number of unique workers in a dataset.
pub fn unique_workers(workers: &[Worker]) -> usize {
    workers
        .iter()
        .map(|w| w.worker_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Row labels `"1"..="N"` for N distinct workers. Assumes worker identities
/// densely cover `1..=N`; sparse identities leave rows with no matching task.
pub fn row_labels(workers: &[Worker]) -> Vec<String> {
    (1..=unique_workers(workers))
        .map(|i| i.to_string())
        .collect()
}
