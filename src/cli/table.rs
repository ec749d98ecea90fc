//! sprint table command implementation
//!
//! Loads a snapshot, builds the ordered task table and prints it.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::order::{OrderColumn, TableOrder, DEFAULT_ORDER};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::project::{crumbs, Crumb, Project};
use crate::row::{TaskRow, Viewer};
use crate::snapshot::Snapshot;
use crate::table::TaskTableBuilder;

/// Options for the table command
pub struct TableOptions {
    pub snapshot: PathBuf,
    pub order: Option<String>,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TableReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<ProjectSummary>,
    total: usize,
    points: f64,
    order: String,
    reverse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<&'static str>,
    rows: Vec<TaskRow>,
}

#[derive(Serialize)]
struct ProjectSummary {
    id: u64,
    name: String,
    uri: String,
    crumbs: Vec<Crumb>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            uri: project.uri(),
            crumbs: crumbs(project),
        }
    }
}

pub fn run(options: TableOptions) -> Result<()> {
    let config = super::load_config(options.dir.as_deref(), options.config.as_deref())?;
    let viewer = Viewer::from_config(&config)?;
    let snapshot = Snapshot::load(&options.snapshot)?;
    let order = options
        .order
        .unwrap_or_else(|| config.table.default_order.clone());

    let lookup = snapshot.task_set();
    let handles = snapshot.handle_map();
    let table = TaskTableBuilder::new(&viewer, &config.tasks, &lookup, &handles).execute(
        &snapshot.tasks,
        &snapshot.edge_map(),
        &snapshot.points,
        &order,
    );

    let column = TableOrder::parse(&order).column;
    let points = snapshot
        .points
        .total(table.rows.iter().map(|row| row.task.phid.as_str()));

    let mut human = HumanOutput::new("Tasks");
    if let Some(project) = snapshot.project.as_ref() {
        let trail: Vec<String> = crumbs(project).into_iter().map(|crumb| crumb.name).collect();
        human.push_summary("Project", trail.join(" > "));
    }
    human.push_summary("Total", table.len().to_string());
    human.push_summary("Points", points.to_string());
    human.push_summary("Order", describe_order(&table.order, column, table.reverse));

    if column == OrderColumn::Default && table.order != DEFAULT_ORDER {
        human.push_warning(format!(
            "unknown order '{}'; ordered by priority instead",
            table.order
        ));
        human.push_next_step("sprint columns");
    }
    for phid in snapshot.unresolved_owners() {
        human.push_warning(format!("no handle for owner {phid}; shown as unassigned"));
    }
    let unknown_statuses: BTreeSet<&str> = snapshot
        .tasks
        .iter()
        .map(|task| task.status.trim())
        .filter(|status| !config.tasks.is_known_status(status))
        .collect();
    for status in unknown_statuses {
        human.push_warning(format!("unknown status '{status}'; treated as closed"));
    }

    for row in &table.rows {
        human.push_detail(format_row(row));
    }

    let report = TableReport {
        project: snapshot.project.as_ref().map(ProjectSummary::from),
        total: table.len(),
        points,
        order: table.order,
        reverse: table.reverse,
        column: column.name(),
        rows: table.rows,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "table",
        &report,
        Some(&human),
    )
}

fn describe_order(name: &str, column: OrderColumn, reverse: bool) -> String {
    let base = match column.name() {
        Some(column) => column.to_string(),
        None if name == DEFAULT_ORDER => "priority (default)".to_string(),
        None => format!("priority (default, requested '{name}')"),
    };
    if reverse {
        format!("{base}, reversed")
    } else {
        base
    }
}

fn format_row(row: &TaskRow) -> String {
    let mut line = format!(
        "[{}][{}] {} (owner: {})",
        row.status,
        row.priority_name,
        row.task.render(),
        row.owner
    );
    if let Some(points) = row.points {
        line.push_str(&format!(" (points: {points})"));
    }
    line.push_str(&format!(" (updated: {})", row.date_modified_display));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_order_variants() {
        assert_eq!(describe_order("Priority", OrderColumn::Priority, false), "Priority");
        assert_eq!(
            describe_order("Last Update", OrderColumn::LastUpdate, true),
            "Last Update, reversed"
        );
        assert_eq!(describe_order("name", OrderColumn::Default, false), "priority (default)");
        assert_eq!(
            describe_order("bogus", OrderColumn::Default, false),
            "priority (default, requested 'bogus')"
        );
    }
}
