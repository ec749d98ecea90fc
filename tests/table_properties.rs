mod support;

use std::collections::{HashMap, HashSet};

use sprint::config::TasksConfig;
use sprint::edge::{group_edges, Edge, EdgeIndex, EdgeType};
use sprint::handle::{Handle, OwnerLabel};
use sprint::points::PointsMap;
use sprint::row::Viewer;
use sprint::table::{TaskTable, TaskTableBuilder};
use sprint::task::{Task, TaskSet};

use support::{phid, task};

fn edge(src: u64, edge_type: EdgeType, dst: u64) -> Edge {
    Edge {
        src: phid(src),
        edge_type,
        dst: phid(dst),
    }
}

fn build(tasks: &[Task], edges: &[Edge], order: &str) -> TaskTable {
    let viewer = Viewer::default();
    let config = TasksConfig::default();
    let lookup = TaskSet::new(tasks.to_vec());
    let handles: HashMap<String, Handle> = HashMap::new();
    TaskTableBuilder::new(&viewer, &config, &lookup, &handles).execute(
        tasks,
        &group_edges(edges.iter().cloned()),
        &PointsMap::new(),
        order,
    )
}

fn ids(table: &TaskTable) -> Vec<String> {
    table.rows.iter().map(|row| row.task.monogram.clone()).collect()
}

fn sample_tasks() -> Vec<Task> {
    vec![
        task(4, 50, "open"),
        task(1, 80, "resolved"),
        task(3, 50, "stalled"),
        task(2, 100, "open"),
        task(5, 25, "wontfix"),
    ]
}

#[test]
fn every_order_yields_each_task_exactly_once() {
    let tasks = sample_tasks();
    let expected: HashSet<String> = tasks.iter().map(Task::monogram).collect();

    for order in [
        "Task",
        "Date Created",
        "Last Update",
        "Assigned to",
        "Priority",
        "Points",
        "Status",
        "name",
        "-Status",
        "bogus",
        "",
    ] {
        let table = build(&tasks, &[], order);
        let got = ids(&table);
        assert_eq!(got.len(), tasks.len(), "order {order:?}");
        assert_eq!(got.into_iter().collect::<HashSet<_>>(), expected, "order {order:?}");
    }
}

#[test]
fn reversed_order_is_exact_reverse_of_ascending() {
    let tasks = sample_tasks();
    for column in ["Priority", "Status", "Assigned to"] {
        let mut ascending = ids(&build(&tasks, &[], column));
        ascending.reverse();
        let descending = ids(&build(&tasks, &[], &format!("-{column}")));
        assert_eq!(descending, ascending, "column {column}");
    }
}

#[test]
fn reversed_ties_come_out_in_reverse_input_order() {
    let tasks = vec![task(1, 50, "open"), task(2, 50, "open"), task(3, 50, "open")];
    assert_eq!(ids(&build(&tasks, &[], "Priority")), vec!["T1", "T2", "T3"]);
    assert_eq!(ids(&build(&tasks, &[], "-Priority")), vec!["T3", "T2", "T1"]);
}

#[test]
fn tasks_without_owner_show_none_assigned() {
    let table = build(&sample_tasks(), &[], "name");
    for row in &table.rows {
        assert_eq!(row.owner, OwnerLabel::Unassigned);
        assert_eq!(row.owner.text(), "none assigned");
    }
}

#[test]
fn closed_tasks_never_carry_badges() {
    let tasks = sample_tasks();
    // Every task blocks every other task, in both directions.
    let mut edges = Vec::new();
    for a in 1..=5 {
        for b in 1..=5 {
            if a != b {
                edges.push(edge(a, EdgeType::DependsOn, b));
            }
        }
    }
    edges.push(edge(1, EdgeType::DependedOnBy, 2));
    edges.push(edge(5, EdgeType::DependedOnBy, 4));

    let table = build(&tasks, &edges, "name");
    for row in &table.rows {
        if row.task.closed {
            assert!(row.task.blocker.is_none(), "{}", row.task.monogram);
            assert!(!row.task.blocked, "{}", row.task.monogram);
            assert_eq!(row.task.class, Some("phui-tag-core-closed"));
        } else {
            assert!(row.task.class.is_none());
        }
    }
    let open_blocked = table
        .rows
        .iter()
        .filter(|row| !row.task.closed && row.task.blocked)
        .count();
    assert_eq!(open_blocked, 3);
}

#[test]
fn edges_leaving_the_working_set_are_ignored() {
    let tasks = vec![task(1, 80, "open"), task(2, 50, "open")];
    let working_set = TaskSet::new(tasks.clone());

    let inside = vec![edge(2, EdgeType::DependsOn, 1)];
    let mut with_outside = inside.clone();
    with_outside.push(edge(2, EdgeType::DependsOn, 99));
    with_outside.push(edge(1, EdgeType::DependsOn, 98));

    let filtered = EdgeIndex::build(&working_set, &group_edges(inside.iter().cloned()));
    let full = EdgeIndex::build(&working_set, &group_edges(with_outside.iter().cloned()));
    assert_eq!(full, filtered);
    assert!(full.get(&phid(1)).is_none());

    assert_eq!(build(&tasks, &with_outside, "name"), build(&tasks, &inside, "name"));
}

#[test]
fn building_twice_gives_identical_tables() {
    let tasks = sample_tasks();
    let edges = vec![
        edge(4, EdgeType::DependsOn, 2),
        edge(2, EdgeType::DependedOnBy, 4),
        edge(3, EdgeType::DependsOn, 1),
    ];
    for order in ["name", "-Last Update", "Task"] {
        assert_eq!(build(&tasks, &edges, order), build(&tasks, &edges, order));
    }
}

#[test]
fn blocker_and_blocked_pair() {
    let mut t1 = task(1, 80, "open");
    t1.title = "Design".to_string();
    let mut t2 = task(2, 50, "open");
    t2.title = "Build".to_string();
    let tasks = vec![t2, t1];
    let edges = vec![
        edge(1, EdgeType::DependedOnBy, 2),
        edge(2, EdgeType::DependsOn, 1),
    ];

    let table = build(&tasks, &edges, "name");
    assert_eq!(ids(&table), vec!["T1", "T2"]);

    let blocker = &table.rows[0].task;
    let badge = blocker.blocker.as_ref().expect("blocker badge");
    assert_eq!(badge.label, "Blocker");
    assert_eq!(badge.tooltip, "Blocks: T2: Build");
    assert!(!blocker.blocked);
    assert_eq!(blocker.render(), "T1: Design [Blocker: T2: Build]");

    let blocked = &table.rows[1].task;
    assert!(blocked.blocker.is_none());
    assert!(blocked.blocked);
    assert_eq!(blocked.render(), "T2: Build [Blocked]");
}

#[test]
fn closed_child_does_not_block() {
    let tasks = vec![task(1, 80, "resolved"), task(2, 50, "open")];
    let table = build(&tasks, &[edge(2, EdgeType::DependsOn, 1)], "name");
    assert_eq!(ids(&table), vec!["T1", "T2"]);
    assert!(!table.rows[1].task.blocked);
}
