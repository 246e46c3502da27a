// src/mcp/mod.rs
// MCP Server implementation

pub mod requests;
pub mod responses;

use crate::dispatch;
use crate::error::RemindersError;
use crate::service::RemindersService;
use requests::{
    CreateReminderRequest, DeleteReminderRequest, ListRemindersRequest, SearchRemindersRequest,
    UpdateReminderRequest,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::{info, warn};

/// Render a tool result as pretty JSON text, or a user-facing error string
fn render_output<T: Serialize>(
    tool: &str,
    result: Result<T, RemindersError>,
) -> Result<String, String> {
    match result {
        Ok(output) => serde_json::to_string_pretty(&output).map_err(|e| e.to_string()),
        Err(e) => {
            warn!(tool, error = %e, "Tool call failed");
            Err(e.to_user_string())
        }
    }
}

/// MCP Server state
#[derive(Clone)]
pub struct RemindersServer {
    service: RemindersService,
    tool_router: ToolRouter<Self>,
}

impl RemindersServer {
    pub fn new(service: RemindersService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl RemindersServer {
    #[tool(
        name = "listLists",
        description = "List all reminder lists with their names and IDs."
    )]
    async fn list_lists(&self) -> Result<String, String> {
        info!(tool = "listLists", "Tool called");
        render_output("listLists", dispatch::list_lists(&self.service).await)
    }

    #[tool(
        name = "listReminders",
        description = "List reminders, optionally only those in one list and/or with a given completion state."
    )]
    async fn list_reminders(
        &self,
        Parameters(req): Parameters<ListRemindersRequest>,
    ) -> Result<String, String> {
        info!(
            tool = "listReminders",
            list = ?req.list_name,
            completed = ?req.completed,
            "Tool called"
        );
        render_output(
            "listReminders",
            dispatch::list_reminders(&self.service, req).await,
        )
    }

    #[tool(
        name = "createReminder",
        description = "Create a reminder in a named list. Returns the new reminder's ID."
    )]
    async fn create_reminder(
        &self,
        Parameters(req): Parameters<CreateReminderRequest>,
    ) -> Result<String, String> {
        info!(tool = "createReminder", list = %req.list_name, "Tool called");
        render_output(
            "createReminder",
            dispatch::create_reminder(&self.service, req).await,
        )
    }

    #[tool(
        name = "updateReminder",
        description = "Update a reminder by ID. Only the fields provided are changed."
    )]
    async fn update_reminder(
        &self,
        Parameters(req): Parameters<UpdateReminderRequest>,
    ) -> Result<String, String> {
        info!(tool = "updateReminder", id = %req.id, "Tool called");
        render_output(
            "updateReminder",
            dispatch::update_reminder(&self.service, req).await,
        )
    }

    #[tool(name = "deleteReminder", description = "Delete a reminder by ID.")]
    async fn delete_reminder(
        &self,
        Parameters(req): Parameters<DeleteReminderRequest>,
    ) -> Result<String, String> {
        info!(tool = "deleteReminder", id = %req.id, "Tool called");
        render_output(
            "deleteReminder",
            dispatch::delete_reminder(&self.service, req).await,
        )
    }

    #[tool(
        name = "searchReminders",
        description = "Find reminders whose title or notes contain a term (case-insensitive)."
    )]
    async fn search_reminders(
        &self,
        Parameters(req): Parameters<SearchRemindersRequest>,
    ) -> Result<String, String> {
        info!(tool = "searchReminders", term = %req.term, "Tool called");
        render_output(
            "searchReminders",
            dispatch::search_reminders(&self.service, req).await,
        )
    }
}

#[tool_handler]
impl ServerHandler for RemindersServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "reminders-mcp".into(),
                title: Some("Reminders - task store bridge".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read and manage the user's reminders: list lists, list, create, update, delete and search reminders. \
                 Due dates use the format 'MM/DD/YYYY HH:MM AM/PM'. Priority: 0 none, 1 high, 5 medium, 9 low."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::MockRunner;
    use std::sync::Arc;

    fn server(runner: MockRunner) -> RemindersServer {
        RemindersServer::new(RemindersService::new(Arc::new(runner)))
    }

    #[test]
    fn test_tool_names_are_camel_case() {
        let server = server(MockRunner::new());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "createReminder",
                "deleteReminder",
                "listLists",
                "listReminders",
                "searchReminders",
                "updateReminder"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_lists_tool_output() {
        let server = server(MockRunner::new().respond("Inbox, Work|||a, b"));
        let text = server.list_lists().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["lists"][1]["name"], "Work");
    }

    #[tokio::test]
    async fn test_tool_error_is_user_string() {
        let server = server(
            MockRunner::new().fail(RemindersError::invocation("execution error: boom (-2700)")),
        );
        let err = server
            .delete_reminder(Parameters(DeleteReminderRequest { id: "x".into() }))
            .await
            .unwrap_err();
        assert!(err.contains("boom"));
    }

    #[test]
    fn test_server_info() {
        let info = server(MockRunner::new()).get_info();
        assert_eq!(info.server_info.name, "reminders-mcp");
        assert!(info.capabilities.tools.is_some());
    }
}
