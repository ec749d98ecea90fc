//! Dependency edges between tasks and the per-task relation index.
//!
//! Raw edges come in as `src -> type -> [dst]`. The index keeps, for every
//! task in the working set, either the tasks it blocks (`parents`) or the
//! tasks blocking it (`children`). Only one direction is ever recorded per
//! task: a non-empty "depended on by" list takes precedence and the
//! "depends on" list is not looked at.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// `src` depends on `dst`; `dst` blocks `src`.
    DependsOn,
    /// `src` is depended on by `dst`; `src` blocks `dst`.
    DependedOnBy,
}

/// A single directed edge record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub src: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    pub dst: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub dst: String,
}

/// Raw edges keyed by source PHID, then by edge type.
pub type EdgeMap = HashMap<String, HashMap<EdgeType, Vec<EdgeRecord>>>;

/// Group a flat edge list into an [`EdgeMap`], keeping record order per
/// source and type.
pub fn group_edges<I>(edges: I) -> EdgeMap
where
    I: IntoIterator<Item = Edge>,
{
    let mut map = EdgeMap::new();
    for edge in edges {
        map.entry(edge.src)
            .or_default()
            .entry(edge.edge_type)
            .or_default()
            .push(EdgeRecord { dst: edge.dst });
    }
    map
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relations {
    /// Tasks this task blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    /// Tasks that block this task.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIndex {
    entries: HashMap<String, Relations>,
}

impl EdgeIndex {
    /// Build the index for `tasks`, dropping edges whose destination is not
    /// part of the working set.
    pub fn build(tasks: &TaskSet, edges: &EdgeMap) -> Self {
        let mut entries = HashMap::new();
        for task in tasks.tasks() {
            if let Some(relations) = relations_for(task, tasks, edges) {
                entries.insert(task.phid.clone(), relations);
            }
        }
        Self { entries }
    }

    pub fn get(&self, phid: &str) -> Option<&Relations> {
        self.entries.get(phid)
    }

    pub fn parents(&self, phid: &str) -> &[String] {
        self.get(phid)
            .map(|relations| relations.parents.as_slice())
            .unwrap_or(&[])
    }

    pub fn children(&self, phid: &str) -> &[String] {
        self.get(phid)
            .map(|relations| relations.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn relations_for(task: &Task, tasks: &TaskSet, edges: &EdgeMap) -> Option<Relations> {
    let by_type = edges.get(&task.phid)?;

    // Precedence is decided on the raw lists, before filtering.
    if let Some(parents) = non_empty(by_type.get(&EdgeType::DependedOnBy)) {
        let parents = in_working_set(parents, tasks);
        return (!parents.is_empty()).then(|| Relations {
            parents,
            children: Vec::new(),
        });
    }

    let children = in_working_set(non_empty(by_type.get(&EdgeType::DependsOn))?, tasks);
    (!children.is_empty()).then(|| Relations {
        parents: Vec::new(),
        children,
    })
}

fn non_empty(records: Option<&Vec<EdgeRecord>>) -> Option<&[EdgeRecord]> {
    records
        .map(Vec::as_slice)
        .filter(|records| !records.is_empty())
}

fn in_working_set(records: &[EdgeRecord], tasks: &TaskSet) -> Vec<String> {
    records
        .iter()
        .filter(|record| tasks.contains(&record.dst))
        .map(|record| record.dst.clone())
        .collect()
}
