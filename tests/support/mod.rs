#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{json, Value};
use sprint::task::Task;
use tempfile::TempDir;

pub fn sprint_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sprint").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("SPRINT_DIR");
    cmd.env_remove("SPRINT_CONFIG");
    cmd
}

pub fn task(id: u64, priority: i64, status: &str) -> Task {
    Task {
        phid: phid(id),
        id,
        title: format!("Task {id}"),
        status: status.to_string(),
        priority,
        owner_phid: None,
        date_created: 1_700_000_000 + id as i64 * 60,
        date_modified: 1_700_000_000 + id as i64 * 120,
    }
}

pub fn phid(id: u64) -> String {
    format!("PHID-TASK-{id}")
}

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(".sprint.toml", contents)
    }

    pub fn write_snapshot(&self, snapshot: &Value) -> std::io::Result<PathBuf> {
        self.write_file("sprint.json", &snapshot.to_string())
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = sprint_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// T1 (High, open, alice, 3 points) blocks T2 (Normal, open, unassigned);
/// T3 (Low, resolved) depends on T1 too.
pub fn sample_snapshot() -> Value {
    json!({
        "project": {
            "id": 7,
            "phid": "PHID-PROJ-7",
            "name": "Sprint 7",
            "primary_slug": "sprint_7",
            "ancestors": [ { "id": 1, "name": "Org" } ]
        },
        "tasks": [
            {
                "phid": "PHID-TASK-2", "id": 2, "title": "Wire the form", "status": "open",
                "priority": 50, "date_created": 1700000100, "date_modified": 1700000900
            },
            {
                "phid": "PHID-TASK-1", "id": 1, "title": "Design the form", "status": "open",
                "priority": 80, "owner_phid": "PHID-USER-alice",
                "date_created": 1700000000, "date_modified": 1700000500
            },
            {
                "phid": "PHID-TASK-3", "id": 3, "title": "Old spike", "status": "resolved",
                "priority": 25, "owner_phid": "PHID-USER-ghost",
                "date_created": 1700000200, "date_modified": 1700000300
            }
        ],
        "edges": [
            { "src": "PHID-TASK-1", "type": "depended_on_by", "dst": "PHID-TASK-2" },
            { "src": "PHID-TASK-2", "type": "depends_on", "dst": "PHID-TASK-1" },
            { "src": "PHID-TASK-3", "type": "depends_on", "dst": "PHID-TASK-1" }
        ],
        "points": { "PHID-TASK-1": 3, "PHID-TASK-2": 5 },
        "handles": [ { "phid": "PHID-USER-alice", "name": "alice", "uri": "/p/alice/" } ]
    })
}
