//! sprint - sprint task tables
//!
//! This library turns the tasks of a sprint into presentation rows and
//! orders them for display.
//!
//! # Core Concepts
//!
//! - **Edge index**: per-task blocking relations derived from raw
//!   "depends on" / "depended on by" edges, limited to the working set
//! - **Blocking status**: whether a task is blocked by an open task or
//!   blocks others
//! - **Rows**: owner label, viewer-formatted dates, priority name, points,
//!   status and blocking badges for each task
//! - **Ordering**: a column name with an optional `-` reverse marker,
//!   stable-sorted, defaulting to highest priority first
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.sprint.toml`
//! - `error`: Error types and result aliases
//! - `task`: Task records and task lookup
//! - `edge`: Raw edges and the edge index
//! - `blocking`: Blocked/blocker resolution
//! - `handle`: Owner handles and labels
//! - `points`: Story points
//! - `row`: Row building and viewer date formatting
//! - `order`: Order parsing and sort keys
//! - `table`: Table assembly
//! - `project`: Project route resolution, navigation and breadcrumbs
//! - `snapshot`: JSON snapshot input
//! - `output`: JSON and human output

pub mod blocking;
pub mod cli;
pub mod config;
pub mod edge;
pub mod error;
pub mod handle;
pub mod order;
pub mod output;
pub mod points;
pub mod project;
pub mod row;
pub mod snapshot;
pub mod table;
pub mod task;

pub use error::{Error, Result};
