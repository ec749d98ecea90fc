//! Task table assembly.
//!
//! Drives the pipeline for one request: build the edge index once, turn every
//! task into a row, order the rows and hand them back with the resolved
//! order. The assembler never fails; missing owners, points or unknown order
//! names degrade to their defaults.

use serde::Serialize;
use tracing::{debug, trace};

use crate::blocking::BlockingStatus;
use crate::config::TasksConfig;
use crate::edge::{EdgeIndex, EdgeMap};
use crate::handle::HandleResolver;
use crate::order::{SortKey, TableOrder};
use crate::points::PointsMap;
use crate::row::{RowBuilder, TaskRow, Viewer};
use crate::task::{Task, TaskLookup, TaskSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskTable {
    pub rows: Vec<TaskRow>,
    /// Order name with the reverse marker stripped.
    pub order: String,
    pub reverse: bool,
}

impl TaskTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct TaskTableBuilder<'a> {
    viewer: &'a Viewer,
    config: &'a TasksConfig,
    lookup: &'a dyn TaskLookup,
    handles: &'a dyn HandleResolver,
}

impl<'a> TaskTableBuilder<'a> {
    pub fn new(
        viewer: &'a Viewer,
        config: &'a TasksConfig,
        lookup: &'a dyn TaskLookup,
        handles: &'a dyn HandleResolver,
    ) -> Self {
        Self {
            viewer,
            config,
            lookup,
            handles,
        }
    }

    pub fn execute(&self, tasks: &[Task], edges: &EdgeMap, points: &PointsMap, order: &str) -> TaskTable {
        let order = TableOrder::parse(order);
        let working_set = TaskSet::new(tasks.to_vec());
        let index = EdgeIndex::build(&working_set, edges);
        debug!(
            tasks = tasks.len(),
            related = index.len(),
            order = %order.name,
            reverse = order.reverse,
            "building task table"
        );

        let rows = RowBuilder::new(self.viewer, self.config, self.handles);
        let mut keyed: Vec<(TaskRow, SortKey)> = Vec::with_capacity(tasks.len());
        for task in tasks {
            let blocking = BlockingStatus::resolve(task, &index, self.lookup, self.config);
            trace!(
                task = %task.monogram(),
                blocked = blocking.is_blocked,
                blocker = blocking.is_blocker,
                "resolved blocking status"
            );
            let row = rows.build(task, points.get(&task.phid), &blocking);
            let key = order.column.key_for(&row);
            keyed.push((row, key));
        }

        // `sort_by` is stable: ties keep input order.
        keyed.sort_by(|(_, left), (_, right)| left.cmp(right));
        if order.reverse {
            keyed.reverse();
        }

        TaskTable {
            rows: keyed.into_iter().map(|(row, _)| row).collect(),
            order: order.name,
            reverse: order.reverse,
        }
    }
}
