//! Table ordering: column names, the reverse marker and sort keys.
//!
//! The requested order is a single string. A leading `-` asks for the whole
//! sorted list to be reversed; the rest names a column exactly as it is
//! displayed. Names that match no column fall back to descending priority.

use std::cmp::Ordering;

use serde::Serialize;

use crate::row::TaskRow;

/// Order requested when the caller does not name one.
pub const DEFAULT_ORDER: &str = "name";
const REVERSE_MARKER: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    Task,
    DateCreated,
    LastUpdate,
    AssignedTo,
    Priority,
    Points,
    Status,
    /// Any other name: highest priority first.
    Default,
}

impl OrderColumn {
    pub const NAMED: [OrderColumn; 7] = [
        OrderColumn::Task,
        OrderColumn::DateCreated,
        OrderColumn::LastUpdate,
        OrderColumn::AssignedTo,
        OrderColumn::Priority,
        OrderColumn::Points,
        OrderColumn::Status,
    ];

    /// Exact, case-sensitive match on the displayed column name.
    pub fn from_name(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|column| column.name() == Some(name))
            .unwrap_or(OrderColumn::Default)
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            OrderColumn::Task => Some("Task"),
            OrderColumn::DateCreated => Some("Date Created"),
            OrderColumn::LastUpdate => Some("Last Update"),
            OrderColumn::AssignedTo => Some("Assigned to"),
            OrderColumn::Priority => Some("Priority"),
            OrderColumn::Points => Some("Points"),
            OrderColumn::Status => Some("Status"),
            OrderColumn::Default => None,
        }
    }

    pub fn key_for(self, row: &TaskRow) -> SortKey {
        match self {
            // Monogram and title split by NUL, so `T1` sorts before `T10`.
            OrderColumn::Task => {
                SortKey::Text(format!("{}\0{}", row.task.monogram, row.task.title))
            }
            OrderColumn::DateCreated => SortKey::Integer(row.date_created),
            OrderColumn::LastUpdate => SortKey::Integer(row.date_modified),
            OrderColumn::AssignedTo => SortKey::Text(row.owner.text().to_string()),
            OrderColumn::Priority => SortKey::Integer(row.priority),
            OrderColumn::Points => SortKey::Number(row.points.unwrap_or(0.0)),
            OrderColumn::Status => SortKey::Text(row.status.clone()),
            OrderColumn::Default => SortKey::Integer(row.priority.saturating_neg()),
        }
    }
}

/// A comparable value extracted from a row.
///
/// Keys of one table always share a variant; mixed variants order by
/// variant so the ordering stays total.
#[derive(Debug, Clone)]
pub enum SortKey {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Integer(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Integer(left), SortKey::Integer(right)) => left.cmp(right),
            (SortKey::Number(left), SortKey::Number(right)) => left.total_cmp(right),
            (SortKey::Text(left), SortKey::Text(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// A parsed order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOrder {
    /// Requested name with the reverse marker stripped.
    pub name: String,
    pub column: OrderColumn,
    pub reverse: bool,
}

impl TableOrder {
    pub fn parse(raw: &str) -> Self {
        let (name, reverse) = match raw.strip_prefix(REVERSE_MARKER) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        Self {
            name: name.to_string(),
            column: OrderColumn::from_name(name),
            reverse,
        }
    }
}

impl Default for TableOrder {
    fn default() -> Self {
        Self::parse(DEFAULT_ORDER)
    }
}
