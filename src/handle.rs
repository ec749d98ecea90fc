//! Owner handles and the owner label shown in the table.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Label used when a task has no owner or the owner cannot be resolved.
pub const UNASSIGNED_LABEL: &str = "none assigned";

/// Displayable representation of a user (or other owner) PHID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
    pub phid: String,
    pub name: String,
    pub uri: String,
}

/// Resolves owner PHIDs to handles for display.
pub trait HandleResolver {
    fn resolve(&self, phid: &str) -> Option<&Handle>;
}

impl HandleResolver for HashMap<String, Handle> {
    fn resolve(&self, phid: &str) -> Option<&Handle> {
        self.get(phid)
    }
}

/// Owner PHIDs referenced by `tasks`, deduplicated, for batch resolution.
pub fn owner_phids(tasks: &[Task]) -> BTreeSet<String> {
    tasks
        .iter()
        .filter_map(|task| task.owner().map(str::to_string))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OwnerLabel {
    Assigned { phid: String, name: String, uri: String },
    Unassigned,
}

impl OwnerLabel {
    pub fn for_task(task: &Task, handles: &dyn HandleResolver) -> Self {
        let Some(phid) = task.owner() else {
            return OwnerLabel::Unassigned;
        };
        match handles.resolve(phid) {
            Some(handle) => OwnerLabel::Assigned {
                phid: handle.phid.clone(),
                name: handle.name.clone(),
                uri: handle.uri.clone(),
            },
            None => OwnerLabel::Unassigned,
        }
    }

    /// Text shown in the table and used for ordering.
    pub fn text(&self) -> &str {
        match self {
            OwnerLabel::Assigned { name, .. } => name,
            OwnerLabel::Unassigned => UNASSIGNED_LABEL,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, OwnerLabel::Assigned { .. })
    }
}

impl fmt::Display for OwnerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
