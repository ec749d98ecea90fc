//! Blocked/blocker status for a single task.

use crate::config::TasksConfig;
use crate::edge::EdgeIndex;
use crate::task::{Task, TaskLookup};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingStatus {
    /// At least one task blocking this one is still open.
    pub is_blocked: bool,
    /// This task blocks at least one other task, open or not.
    pub is_blocker: bool,
    /// Tasks this task blocks, resolved from its parent PHIDs.
    pub blocker_tasks: Vec<Task>,
}

impl BlockingStatus {
    pub fn resolve(
        task: &Task,
        index: &EdgeIndex,
        lookup: &dyn TaskLookup,
        statuses: &TasksConfig,
    ) -> Self {
        let is_blocked = index.children(&task.phid).iter().any(|phid| {
            lookup
                .tasks_for_phid(phid)
                .iter()
                .any(|child| statuses.is_open_status(&child.status))
        });

        let parents = index.parents(&task.phid);
        let blocker_tasks = parents
            .iter()
            .flat_map(|phid| lookup.tasks_for_phid(phid))
            .collect();

        Self {
            is_blocked,
            is_blocker: !parents.is_empty(),
            blocker_tasks,
        }
    }

    /// Closed tasks never show the blocker badge.
    pub fn show_blocker(&self, task_open: bool) -> bool {
        self.is_blocker && task_open
    }

    /// Closed tasks never show the blocked badge.
    pub fn show_blocked(&self, task_open: bool) -> bool {
        self.is_blocked && task_open
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::edge::{group_edges, Edge, EdgeType};
    use crate::task::TaskSet;

    fn task(id: u64, status: &str) -> Task {
        Task {
            phid: format!("PHID-TASK-{id}"),
            id,
            title: format!("Task {id}"),
            status: status.to_string(),
            priority: 50,
            owner_phid: None,
            date_created: 0,
            date_modified: 0,
        }
    }

    fn edge(src: u64, edge_type: EdgeType, dst: u64) -> Edge {
        Edge {
            src: format!("PHID-TASK-{src}"),
            edge_type,
            dst: format!("PHID-TASK-{dst}"),
        }
    }

    #[test]
    fn open_child_blocks() {
        let tasks = TaskSet::new(vec![task(1, "open"), task(2, "open")]);
        let index = EdgeIndex::build(&tasks, &group_edges([edge(2, EdgeType::DependsOn, 1)]));
        let config = TasksConfig::default();

        let status = BlockingStatus::resolve(&tasks.tasks()[1], &index, &tasks, &config);
        assert!(status.is_blocked);
        assert!(!status.is_blocker);
        assert!(status.blocker_tasks.is_empty());
    }

    #[test]
    fn closed_child_does_not_block() {
        let tasks = TaskSet::new(vec![task(1, "resolved"), task(2, "open")]);
        let index = EdgeIndex::build(&tasks, &group_edges([edge(2, EdgeType::DependsOn, 1)]));
        let config = TasksConfig::default();

        let status = BlockingStatus::resolve(&tasks.tasks()[1], &index, &tasks, &config);
        assert!(!status.is_blocked);
    }

    #[test]
    fn parents_make_blocker_even_when_closed() {
        let tasks = TaskSet::new(vec![task(1, "open"), task(2, "resolved"), task(3, "open")]);
        let index = EdgeIndex::build(
            &tasks,
            &group_edges([
                edge(1, EdgeType::DependedOnBy, 2),
                edge(1, EdgeType::DependedOnBy, 3),
            ]),
        );
        let config = TasksConfig::default();

        let status = BlockingStatus::resolve(&tasks.tasks()[0], &index, &tasks, &config);
        assert!(status.is_blocker);
        assert!(!status.is_blocked);
        let ids: Vec<u64> = status.blocker_tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn lookup_may_return_many_or_none() {
        let tasks = TaskSet::new(vec![task(1, "open"), task(2, "open"), task(3, "open")]);
        let index = EdgeIndex::build(
            &tasks,
            &group_edges([
                edge(1, EdgeType::DependedOnBy, 2),
                edge(1, EdgeType::DependedOnBy, 3),
            ]),
        );
        let mut lookup = HashMap::new();
        lookup.insert(
            "PHID-TASK-2".to_string(),
            vec![task(2, "open"), task(20, "open")],
        );
        let config = TasksConfig::default();

        let status = BlockingStatus::resolve(&tasks.tasks()[0], &index, &lookup, &config);
        assert!(status.is_blocker);
        assert_eq!(status.blocker_tasks.len(), 2);
    }

    #[test]
    fn badges_hidden_for_closed_tasks() {
        let status = BlockingStatus {
            is_blocked: true,
            is_blocker: true,
            blocker_tasks: Vec::new(),
        };
        assert!(status.show_blocker(true));
        assert!(status.show_blocked(true));
        assert!(!status.show_blocker(false));
        assert!(!status.show_blocked(false));
    }
}
