//! Tasks as seen by the sprint table.
//!
//! Tasks are loaded elsewhere and are read-only here. The table only needs
//! identity, display fields, status, priority, owner and the two timestamps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prefix used to build task monograms (`T123`).
pub const MONOGRAM_PREFIX: &str = "T";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub phid: String,
    pub id: u64,
    pub title: String,
    pub status: String,
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_phid: Option<String>,
    /// Epoch seconds.
    pub date_created: i64,
    /// Epoch seconds.
    pub date_modified: i64,
}

impl Task {
    pub fn monogram(&self) -> String {
        format!("{MONOGRAM_PREFIX}{}", self.id)
    }

    pub fn uri(&self) -> String {
        format!("/{}", self.monogram())
    }

    /// Text used for links and tooltips, e.g. `T12: Fix the login form`.
    pub fn link_text(&self) -> String {
        format!("{}: {}", self.monogram(), self.title)
    }

    /// Owner PHID, with empty strings treated as unassigned.
    pub fn owner(&self) -> Option<&str> {
        self.owner_phid
            .as_deref()
            .map(str::trim)
            .filter(|phid| !phid.is_empty())
    }
}

/// Loads tasks by PHID. A PHID may resolve to zero or several tasks.
pub trait TaskLookup {
    fn tasks_for_phid(&self, phid: &str) -> Vec<Task>;
}

/// The working set of tasks, in input order, indexed by PHID.
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
    by_phid: HashMap<String, usize>,
}

impl TaskSet {
    /// Later duplicates of a PHID replace earlier ones in the index but
    /// stay in the ordered list.
    pub fn new(tasks: Vec<Task>) -> Self {
        let by_phid = tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| (task.phid.clone(), idx))
            .collect();
        Self { tasks, by_phid }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, phid: &str) -> Option<&Task> {
        self.by_phid.get(phid).map(|idx| &self.tasks[*idx])
    }

    pub fn contains(&self, phid: &str) -> bool {
        self.by_phid.contains_key(phid)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskLookup for TaskSet {
    fn tasks_for_phid(&self, phid: &str) -> Vec<Task> {
        self.get(phid).cloned().into_iter().collect()
    }
}

impl TaskLookup for HashMap<String, Vec<Task>> {
    fn tasks_for_phid(&self, phid: &str) -> Vec<Task> {
        self.get(phid).cloned().unwrap_or_default()
    }
}
