// src/types.rs
// Records exchanged with the host task store

use schemars::JsonSchema;
use serde::Serialize;

/// Priority values with a defined meaning in the host store.
/// Any other raw value is carried through untouched.
pub mod priority {
    pub const NONE: i64 = 0;
    pub const HIGH: i64 = 1;
    pub const MEDIUM: i64 = 5;
    pub const LOW: i64 = 9;

    /// Human label for a raw priority, `None` when the value has no defined meaning
    pub fn label(raw: i64) -> Option<&'static str> {
        match raw {
            NONE => Some("none"),
            HIGH => Some("high"),
            MEDIUM => Some("medium"),
            LOW => Some("low"),
            _ => None,
        }
    }
}

/// A named container of reminders. Read-only from this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ReminderList {
    pub name: String,
    pub id: String,
}

/// A single task entry as read from the host store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub name: String,
    /// `None` when the host has no note; `Some("")` for an empty note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub completed: bool,
    /// Name of the owning list at read time
    pub list: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<String>,
}

/// Arguments for creating a reminder
#[derive(Debug, Clone, Default)]
pub struct NewReminder {
    pub name: String,
    pub list_name: String,
    pub body: Option<String>,
    /// `MM/DD/YYYY HH:MM AM/PM`, passed through to the host date parser
    pub due_date: Option<String>,
    pub priority: Option<i64>,
}

impl NewReminder {
    pub fn new(name: impl Into<String>, list_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list_name: list_name.into(),
            ..Default::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Partial update: only `Some` fields are touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderUpdate {
    pub name: Option<String>,
    pub body: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<String>,
    pub priority: Option<i64>,
}

impl ReminderUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.body.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
    }
}

/// Filters for `listReminders`; both optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    pub list_name: Option<String>,
    pub completed: Option<bool>,
}

impl ReminderFilter {
    /// Client-side check mirroring the host-side clauses
    pub fn matches(&self, reminder: &Reminder) -> bool {
        self.list_name
            .as_deref()
            .is_none_or(|list| reminder.list == list)
            && self.completed.is_none_or(|c| reminder.completed == c)
    }
}
