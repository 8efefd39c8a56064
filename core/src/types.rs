//! Domain types for the todo collection.
//!
//! # Design
//! `Todo` is the stored record; `TodoCreate` and `TodoPatch` are the input
//! value objects the service binds request bodies into. Length bounds live on
//! the input objects and are checked by `validate` before the store builds or
//! mutates a record. Wire field names keep the `todo_` prefix of the service's
//! JSON contract while the Rust fields stay short.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Minimum number of characters in a todo name.
pub const NAME_MIN_LEN: usize = 2;
/// Maximum number of characters in a todo name.
pub const NAME_MAX_LEN: usize = 150;
/// Maximum number of characters in a todo description.
pub const DESCRIPTION_MAX_LEN: usize = 300;

/// Urgency classification. Lower integer means more urgent.
///
/// Serialized as the bare integer (`1`, `2`, `3`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriorityLevel {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

impl PriorityLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<PriorityLevel> for u8 {
    fn from(level: PriorityLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for PriorityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PriorityLevel::High),
            2 => Ok(PriorityLevel::Medium),
            3 => Ok(PriorityLevel::Low),
            other => Err(format!("invalid priority level {other}, expected 1, 2 or 3")),
        }
    }
}

/// A single todo record held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "todo_id")]
    pub id: u64,
    #[serde(rename = "todo_name")]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    pub priority: PriorityLevel,
    pub completed: bool,
}

/// Input for creating a todo. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreate {
    #[serde(rename = "todo_name")]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    #[serde(default)]
    pub priority: PriorityLevel,
    #[serde(default)]
    pub completed: bool,
}

impl TodoCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: PriorityLevel::default(),
            completed: false,
        }
    }

    pub fn with_priority(mut self, priority: PriorityLevel) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        check_name(&self.name)?;
        check_description(&self.description)
    }

    pub(crate) fn into_todo(self, id: u64) -> Todo {
        Todo {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            completed: self.completed,
        }
    }
}

/// Partial update. Only the fields present in the JSON are applied; omitted
/// fields remain unchanged on the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(rename = "todo_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "todo_description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(description) = &self.description {
            check_description(description)?;
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, todo: &mut Todo) {
        if let Some(name) = self.name {
            todo.name = name;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

fn check_name(name: &str) -> Result<(), StoreError> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(StoreError::InvalidArgument(format!(
            "todo_name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), StoreError> {
    let len = description.chars().count();
    if len > DESCRIPTION_MAX_LEN {
        return Err(StoreError::InvalidArgument(format!(
            "todo_description must be at most {DESCRIPTION_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
