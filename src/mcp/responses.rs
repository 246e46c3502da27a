//! Structured output types for MCP tools.
//!
//! Every tool returns a JSON object; read tools carry their records plus a total.

use schemars::JsonSchema;
use serde::Serialize;

use crate::types::{Reminder, ReminderList};

#[derive(Debug, Serialize, JsonSchema)]
pub struct ListsOutput {
    pub lists: Vec<ReminderList>,
    pub total: usize,
}

impl From<Vec<ReminderList>> for ListsOutput {
    fn from(lists: Vec<ReminderList>) -> Self {
        Self {
            total: lists.len(),
            lists,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct RemindersOutput {
    pub reminders: Vec<Reminder>,
    pub total: usize,
}

impl From<Vec<Reminder>> for RemindersOutput {
    fn from(reminders: Vec<Reminder>) -> Self {
        Self {
            total: reminders.len(),
            reminders,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CreatedOutput {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    Updated,
    Deleted,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct WriteOutput {
    pub id: String,
    pub status: WriteStatus,
}
