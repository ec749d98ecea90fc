//! Presentation rows for the task table.
//!
//! A row carries everything the table renderer needs: the task cell with its
//! blocking badges, raw and viewer-formatted dates, the owner label, the
//! priority value and name, points and status. Raw values are kept next to
//! the formatted ones so ordering never depends on display text.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::blocking::BlockingStatus;
use crate::config::{Config, TasksConfig};
use crate::error::Result;
use crate::handle::{HandleResolver, OwnerLabel};
use crate::task::Task;

pub const BLOCKER_LABEL: &str = "Blocker";
pub const BLOCKED_LABEL: &str = "Blocked";
pub const BLOCKS_TOOLTIP_PREFIX: &str = "Blocks: ";
pub const BLOCKS_SEPARATOR: &str = "| ";
/// Visual class applied to links of closed tasks.
pub const CLOSED_CLASS: &str = "phui-tag-core-closed";

/// Who is looking at the table; controls date rendering.
#[derive(Debug, Clone)]
pub struct Viewer {
    offset: FixedOffset,
    date_format: String,
}

impl Viewer {
    pub fn new(offset: FixedOffset, date_format: impl Into<String>) -> Self {
        Self {
            offset,
            date_format: date_format.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.display.offset()?,
            config.display.date_format.clone(),
        ))
    }

    /// Format epoch seconds in the viewer's timezone. Out-of-range
    /// timestamps and unusable formats render as the raw number.
    pub fn format_datetime(&self, epoch: i64) -> String {
        let Some(utc) = DateTime::from_timestamp(epoch, 0) else {
            return epoch.to_string();
        };
        let local = utc.with_timezone(&self.offset);
        let mut out = String::new();
        match write!(out, "{}", local.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => epoch.to_string(),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(Utc.fix(), crate::config::DisplayConfig::default().date_format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockerBadge {
    pub label: &'static str,
    /// Link texts of the tasks this task blocks.
    pub blocks: Vec<String>,
    pub tooltip: String,
}

impl BlockerBadge {
    fn new(blocker_tasks: &[Task]) -> Self {
        let blocks: Vec<String> = blocker_tasks.iter().map(Task::link_text).collect();
        let tooltip = format!("{BLOCKS_TOOLTIP_PREFIX}{}", blocks.join(BLOCKS_SEPARATOR));
        Self {
            label: BLOCKER_LABEL,
            blocks,
            tooltip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCell {
    pub phid: String,
    pub monogram: String,
    pub title: String,
    pub href: String,
    pub closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocker: Option<BlockerBadge>,
    pub blocked: bool,
}

impl TaskCell {
    /// Link label, e.g. `T12: Fix the login form`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.monogram, self.title)
    }

    /// Plain-text rendering with badges, for terminal output.
    pub fn render(&self) -> String {
        let mut text = self.label();
        if let Some(blocker) = &self.blocker {
            text.push_str(&format!(" [{}: {}]", blocker.label, blocker.blocks.join(BLOCKS_SEPARATOR)));
        }
        if self.blocked {
            text.push_str(&format!(" [{BLOCKED_LABEL}]"));
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub task: TaskCell,
    pub date_created: i64,
    pub date_created_display: String,
    pub date_modified: i64,
    pub date_modified_display: String,
    pub owner: OwnerLabel,
    pub priority: i64,
    pub priority_name: String,
    pub points: Option<f64>,
    pub status: String,
}

/// Builds one [`TaskRow`] per task.
pub struct RowBuilder<'a> {
    viewer: &'a Viewer,
    tasks: &'a TasksConfig,
    handles: &'a dyn HandleResolver,
}

impl<'a> RowBuilder<'a> {
    pub fn new(viewer: &'a Viewer, tasks: &'a TasksConfig, handles: &'a dyn HandleResolver) -> Self {
        Self {
            viewer,
            tasks,
            handles,
        }
    }

    pub fn build(&self, task: &Task, points: Option<f64>, blocking: &BlockingStatus) -> TaskRow {
        let is_open = self.tasks.is_open_status(&task.status);

        let blocker = blocking
            .show_blocker(is_open)
            .then(|| BlockerBadge::new(&blocking.blocker_tasks));

        let cell = TaskCell {
            phid: task.phid.clone(),
            monogram: task.monogram(),
            title: task.title.clone(),
            href: task.uri(),
            closed: !is_open,
            class: (!is_open).then_some(CLOSED_CLASS),
            blocker,
            blocked: blocking.show_blocked(is_open),
        };

        TaskRow {
            task: cell,
            date_created: task.date_created,
            date_created_display: self.viewer.format_datetime(task.date_created),
            date_modified: task.date_modified,
            date_modified_display: self.viewer.format_datetime(task.date_modified),
            owner: OwnerLabel::for_task(task, self.handles),
            priority: task.priority,
            priority_name: self.tasks.priority_name(task.priority),
            points,
            status: task.status.clone(),
        }
    }
}
