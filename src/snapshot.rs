//! JSON snapshots of a sprint: the tasks, their edges, points, owner handles
//! and optionally the project they belong to.
//!
//! ```json
//! {
//!   "project": { "id": 7, "phid": "PHID-PROJ-7", "name": "Sprint 7", "primary_slug": "sprint_7" },
//!   "tasks": [ { "phid": "PHID-TASK-1", "id": 1, "title": "...", "status": "open",
//!                "priority": 80, "date_created": 1700000000, "date_modified": 1700000000 } ],
//!   "edges": [ { "src": "PHID-TASK-2", "type": "depends_on", "dst": "PHID-TASK-1" } ],
//!   "points": { "PHID-TASK-1": 3 },
//!   "handles": [ { "phid": "PHID-USER-1", "name": "alice", "uri": "/p/alice/" } ]
//! }
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge::{group_edges, Edge, EdgeMap};
use crate::error::{Error, Result};
use crate::handle::{owner_phids, Handle};
use crate::points::PointsMap;
use crate::project::Project;
use crate::task::{Task, TaskSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub points: PointsMap,
    #[serde(default)]
    pub handles: Vec<Handle>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            tasks = snapshot.tasks.len(),
            edges = snapshot.edges.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)
            .map_err(|err| Error::InvalidSnapshot(err.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.phid.trim().is_empty() {
                return Err(Error::InvalidSnapshot(format!(
                    "task {} has an empty phid",
                    task.monogram()
                )));
            }
            if !seen.insert(task.phid.as_str()) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate task phid '{}'",
                    task.phid
                )));
            }
        }
        Ok(())
    }

    pub fn task_set(&self) -> TaskSet {
        TaskSet::new(self.tasks.clone())
    }

    pub fn edge_map(&self) -> EdgeMap {
        group_edges(self.edges.iter().cloned())
    }

    pub fn handle_map(&self) -> HashMap<String, Handle> {
        self.handles
            .iter()
            .map(|handle| (handle.phid.clone(), handle.clone()))
            .collect()
    }

    /// Owner PHIDs with no matching handle; these render as unassigned.
    pub fn unresolved_owners(&self) -> BTreeSet<String> {
        let known: HashSet<&str> = self.handles.iter().map(|handle| handle.phid.as_str()).collect();
        owner_phids(&self.tasks)
            .into_iter()
            .filter(|phid| !known.contains(phid.as_str()))
            .collect()
    }
}
