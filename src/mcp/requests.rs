// src/mcp/requests.rs
// MCP tool request types
//
// Keys are camelCase on the wire; snake_case aliases are accepted for callers
// that send Rust-style names.

use rmcp::schemars;
use serde::Deserialize;

use crate::types::{NewReminder, ReminderFilter, ReminderUpdate};

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRemindersRequest {
    #[schemars(description = "Only reminders in the list with this name")]
    #[serde(default, alias = "list_name")]
    pub list_name: Option<String>,
    #[schemars(description = "Only completed (true) or only open (false) reminders")]
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<ListRemindersRequest> for ReminderFilter {
    fn from(req: ListRemindersRequest) -> Self {
        ReminderFilter {
            list_name: req.list_name,
            completed: req.completed,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderRequest {
    #[schemars(description = "Title of the reminder")]
    pub name: String,
    #[schemars(description = "Name of the list to create the reminder in")]
    #[serde(alias = "list_name")]
    pub list_name: String,
    #[schemars(description = "Notes")]
    #[serde(default)]
    pub body: Option<String>,
    #[schemars(description = "Due date, format 'MM/DD/YYYY HH:MM AM/PM' (e.g. '12/25/2025 9:00 AM')")]
    #[serde(default, alias = "due_date")]
    pub due_date: Option<String>,
    #[schemars(description = "Priority: 0 none, 1 high, 5 medium, 9 low")]
    #[serde(default)]
    pub priority: Option<i64>,
}

impl From<CreateReminderRequest> for NewReminder {
    fn from(req: CreateReminderRequest) -> Self {
        NewReminder {
            name: req.name,
            list_name: req.list_name,
            body: req.body,
            due_date: req.due_date,
            priority: req.priority,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderRequest {
    #[schemars(description = "Reminder ID")]
    pub id: String,
    #[schemars(description = "New title")]
    #[serde(default)]
    pub name: Option<String>,
    #[schemars(description = "New notes")]
    #[serde(default)]
    pub body: Option<String>,
    #[schemars(description = "Mark completed (true) or open (false)")]
    #[serde(default)]
    pub completed: Option<bool>,
    #[schemars(description = "New due date, format 'MM/DD/YYYY HH:MM AM/PM'")]
    #[serde(default, alias = "due_date")]
    pub due_date: Option<String>,
    #[schemars(description = "New priority: 0 none, 1 high, 5 medium, 9 low")]
    #[serde(default)]
    pub priority: Option<i64>,
}

impl UpdateReminderRequest {
    /// Split into the target id and the fields to touch
    pub fn into_parts(self) -> (String, ReminderUpdate) {
        (
            self.id,
            ReminderUpdate {
                name: self.name,
                body: self.body,
                completed: self.completed,
                due_date: self.due_date,
                priority: self.priority,
            },
        )
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteReminderRequest {
    #[schemars(description = "Reminder ID")]
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRemindersRequest {
    #[schemars(description = "Text to find in reminder titles or notes (case-insensitive)")]
    #[serde(alias = "searchTerm", alias = "search_term", alias = "query")]
    pub term: String,
    #[schemars(description = "Keep only results from the list with this name")]
    #[serde(default)]
    pub list: Option<String>,
    #[schemars(description = "Keep only completed (true) or open (false) results")]
    #[serde(default)]
    pub completed: Option<bool>,
}

impl SearchRemindersRequest {
    /// Filters applied to search results after decoding
    pub fn filter(&self) -> ReminderFilter {
        ReminderFilter {
            list_name: self.list.clone(),
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_camel_and_snake_keys() {
        let camel: CreateReminderRequest =
            serde_json::from_value(json!({"name": "a", "listName": "b", "dueDate": "d"})).unwrap();
        assert_eq!(camel.list_name, "b");
        assert_eq!(camel.due_date.as_deref(), Some("d"));

        let snake: CreateReminderRequest =
            serde_json::from_value(json!({"name": "a", "list_name": "b"})).unwrap();
        assert_eq!(snake.list_name, "b");
        assert!(snake.body.is_none());
    }

    #[test]
    fn test_create_missing_required_field() {
        let err =
            serde_json::from_value::<CreateReminderRequest>(json!({"name": "a"})).unwrap_err();
        assert!(err.to_string().contains("listName"));
    }

    #[test]
    fn test_update_into_parts() {
        let req: UpdateReminderRequest =
            serde_json::from_value(json!({"id": "x", "completed": true})).unwrap();
        let (id, update) = req.into_parts();
        assert_eq!(id, "x");
        assert_eq!(
            update,
            ReminderUpdate {
                completed: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_search_term_aliases() {
        for key in ["term", "searchTerm", "search_term", "query"] {
            let mut args = serde_json::Map::new();
            args.insert(key.to_string(), json!("meeting"));
            let req: SearchRemindersRequest =
                serde_json::from_value(serde_json::Value::Object(args)).unwrap();
            assert_eq!(req.term, "meeting");
        }
    }

    #[test]
    fn test_list_reminders_all_optional() {
        let req: ListRemindersRequest = serde_json::from_value(json!({})).unwrap();
        let filter: ReminderFilter = req.into();
        assert!(filter.list_name.is_none());
        assert!(filter.completed.is_none());
    }
}
