//! Configuration loading and management
//!
//! Handles parsing of `.sprint.toml` configuration files.

use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".sprint.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task status taxonomy and priority names
    #[serde(default)]
    pub tasks: TasksConfig,

    /// How dates are shown to the viewer
    #[serde(default)]
    pub display: DisplayConfig,

    /// Task table defaults
    #[serde(default)]
    pub table: TableConfig,
}

/// Tasks configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Statuses considered open
    #[serde(default = "default_open_statuses")]
    pub open_statuses: Vec<String>,

    /// Statuses considered closed
    #[serde(default = "default_closed_statuses")]
    pub closed_statuses: Vec<String>,

    /// Display names for numeric priorities
    #[serde(default = "default_priorities")]
    pub priorities: Vec<PriorityLevel>,
}

/// A numeric priority and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityLevel {
    pub value: i64,
    pub name: String,
}

fn default_open_statuses() -> Vec<String> {
    vec!["open".to_string(), "stalled".to_string()]
}

fn default_closed_statuses() -> Vec<String> {
    ["resolved", "wontfix", "invalid", "duplicate", "spite"]
        .iter()
        .map(|status| status.to_string())
        .collect()
}

fn default_priorities() -> Vec<PriorityLevel> {
    [
        (100, "Unbreak Now!"),
        (90, "Needs Triage"),
        (80, "High"),
        (50, "Normal"),
        (25, "Low"),
        (0, "Wishlist"),
    ]
    .iter()
    .map(|(value, name)| PriorityLevel {
        value: *value,
        name: name.to_string(),
    })
    .collect()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            open_statuses: default_open_statuses(),
            closed_statuses: default_closed_statuses(),
            priorities: default_priorities(),
        }
    }
}

impl TasksConfig {
    /// Unknown statuses are treated as closed.
    pub fn is_open_status(&self, status: &str) -> bool {
        let trimmed = status.trim();
        self.open_statuses.iter().any(|entry| entry == trimmed)
    }

    /// Listed as either open or closed. Unlisted statuses still count as
    /// closed but are worth flagging.
    pub fn is_known_status(&self, status: &str) -> bool {
        let trimmed = status.trim();
        self.open_statuses
            .iter()
            .chain(&self.closed_statuses)
            .any(|entry| entry.trim() == trimmed)
    }

    /// Display name for a priority, falling back to the number itself.
    pub fn priority_name(&self, priority: i64) -> String {
        self.priorities
            .iter()
            .find(|level| level.value == priority)
            .map(|level| level.name.clone())
            .unwrap_or_else(|| priority.to_string())
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.open_statuses.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "tasks.open_statuses cannot be empty".to_string(),
            ));
        }

        let mut open = std::collections::HashSet::new();
        for status in &self.open_statuses {
            let trimmed = status.trim();
            if trimmed.is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "tasks.open_statuses cannot include empty entries".to_string(),
                ));
            }
            if !open.insert(trimmed.to_string()) {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "tasks.open_statuses has duplicate entry '{trimmed}'"
                )));
            }
        }

        for status in &self.closed_statuses {
            let trimmed = status.trim();
            if trimmed.is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "tasks.closed_statuses cannot include empty entries".to_string(),
                ));
            }
            if open.contains(trimmed) {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "tasks.closed_statuses '{trimmed}' is also listed as open"
                )));
            }
        }

        let mut values = std::collections::HashSet::new();
        for level in &self.priorities {
            if level.name.trim().is_empty() {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "tasks.priorities: priority {} has an empty name",
                    level.value
                )));
            }
            if !values.insert(level.value) {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "tasks.priorities has duplicate value {}",
                    level.value
                )));
            }
        }

        Ok(())
    }
}

/// Date display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Viewer timezone as `UTC`, `Z` or `+HH:MM` / `-HH:MM`
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// strftime-style format for created/updated dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "%a, %b %-d, %-I:%M %p".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
        }
    }
}

impl DisplayConfig {
    pub fn offset(&self) -> crate::error::Result<FixedOffset> {
        parse_utc_offset(&self.timezone).ok_or_else(|| {
            crate::error::Error::InvalidConfig(format!(
                "display.timezone: invalid offset '{}' (expected UTC or +HH:MM)",
                self.timezone
            ))
        })
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.offset()?;
        if self.date_format.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "display.date_format cannot be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(crate::error::Error::InvalidConfig(format!(
                "display.date_format: invalid format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Parse `UTC`, `Z`, `+HH:MM`, `-HH:MM` or `+HHMM` into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match trimmed.as_bytes().first()? {
        b'+' => (1, &trimmed[1..]),
        b'-' => (-1, &trimmed[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|ch| *ch != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Task table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Order used when the request does not name one
    #[serde(default = "default_order")]
    pub default_order: String,
}

fn default_order() -> String {
    crate::order::DEFAULT_ORDER.to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_order: default_order(),
        }
    }
}

impl Config {
    /// Load configuration from a `.sprint.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, the user config dir, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load(&config_path).unwrap_or_else(|err| {
                tracing::warn!(path = %config_path.display(), %err, "ignoring invalid config");
                Self::default()
            });
        }

        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                return Self::load(&user_path).unwrap_or_else(|err| {
                    tracing::warn!(path = %user_path.display(), %err, "ignoring invalid config");
                    Self::default()
                });
            }
        }

        Self::default()
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.tasks.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

/// Per-user config file, e.g. `~/.config/sprint/config.toml` on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "sprint")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
