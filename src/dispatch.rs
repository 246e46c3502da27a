// src/dispatch.rs
// Operation entry points shared by the MCP tools and the CLI
//
// Typed functions take parsed requests; `dispatch` accepts an operation name
// plus a loose JSON argument bag, validates required fields, and routes.

use crate::error::{RemindersError, Result};
use crate::mcp::requests::{
    CreateReminderRequest, DeleteReminderRequest, ListRemindersRequest, SearchRemindersRequest,
    UpdateReminderRequest,
};
use crate::mcp::responses::{CreatedOutput, ListsOutput, RemindersOutput, WriteOutput, WriteStatus};
use crate::script::{Operation, Script};
use crate::service::RemindersService;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

/// Reject blank values for fields the host requires to be non-empty
fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RemindersError::InvalidInput(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(())
}

fn validate_create(req: &CreateReminderRequest) -> Result<()> {
    require_non_empty("name", &req.name)?;
    require_non_empty("listName", &req.list_name)
}

fn validate_update(req: &UpdateReminderRequest) -> Result<()> {
    require_non_empty("id", &req.id)?;
    if let Some(name) = &req.name {
        require_non_empty("name", name)?;
    }
    Ok(())
}

fn validate_delete(req: &DeleteReminderRequest) -> Result<()> {
    require_non_empty("id", &req.id)
}

/// Parse an argument bag; a missing bag counts as an empty object
fn parse_args<T: DeserializeOwned>(operation: Operation, args: Value) -> Result<T> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| {
        RemindersError::InvalidInput(format!("{}: {}", operation, e))
    })
}

pub async fn list_lists(service: &RemindersService) -> Result<ListsOutput> {
    Ok(service.list_lists().await?.into())
}

pub async fn list_reminders(
    service: &RemindersService,
    req: ListRemindersRequest,
) -> Result<RemindersOutput> {
    Ok(service.list_reminders(&req.into()).await?.into())
}

pub async fn create_reminder(
    service: &RemindersService,
    req: CreateReminderRequest,
) -> Result<CreatedOutput> {
    validate_create(&req)?;
    let id = service.create_reminder(&req.into()).await?;
    Ok(CreatedOutput { id })
}

pub async fn update_reminder(
    service: &RemindersService,
    req: UpdateReminderRequest,
) -> Result<WriteOutput> {
    validate_update(&req)?;
    let (id, update) = req.into_parts();
    service.update_reminder(&id, &update).await?;
    Ok(WriteOutput {
        id,
        status: WriteStatus::Updated,
    })
}

pub async fn delete_reminder(
    service: &RemindersService,
    req: DeleteReminderRequest,
) -> Result<WriteOutput> {
    validate_delete(&req)?;
    service.delete_reminder(&req.id).await?;
    Ok(WriteOutput {
        id: req.id,
        status: WriteStatus::Deleted,
    })
}

/// Search, then apply the optional list/completed filters to the results
pub async fn search_reminders(
    service: &RemindersService,
    req: SearchRemindersRequest,
) -> Result<RemindersOutput> {
    let filter = req.filter();
    let found = service.search_reminders(&req.term).await?;
    let kept: Vec<_> = found.into_iter().filter(|r| filter.matches(r)).collect();
    Ok(kept.into())
}

/// Route a named operation with a loosely-typed argument bag
pub async fn dispatch(service: &RemindersService, operation: &str, args: Value) -> Result<Value> {
    let op: Operation = operation.parse()?;
    info!(operation = %op, "Dispatching operation");

    let value = match op {
        Operation::ListLists => serde_json::to_value(list_lists(service).await?)?,
        Operation::ListReminders => {
            serde_json::to_value(list_reminders(service, parse_args(op, args)?).await?)?
        }
        Operation::CreateReminder => {
            serde_json::to_value(create_reminder(service, parse_args(op, args)?).await?)?
        }
        Operation::UpdateReminder => {
            serde_json::to_value(update_reminder(service, parse_args(op, args)?).await?)?
        }
        Operation::DeleteReminder => {
            serde_json::to_value(delete_reminder(service, parse_args(op, args)?).await?)?
        }
        Operation::SearchReminders => {
            serde_json::to_value(search_reminders(service, parse_args(op, args)?).await?)?
        }
    };
    Ok(value)
}

/// Build the script a named operation would run, without running it
pub fn render(service: &RemindersService, operation: &str, args: Value) -> Result<Script> {
    let op: Operation = operation.parse()?;
    let builder = service.builder();

    let script = match op {
        Operation::ListLists => builder.list_lists(),
        Operation::ListReminders => {
            let req: ListRemindersRequest = parse_args(op, args)?;
            builder.list_reminders(&req.into())
        }
        Operation::CreateReminder => {
            let req: CreateReminderRequest = parse_args(op, args)?;
            validate_create(&req)?;
            builder.create_reminder(&req.into())
        }
        Operation::UpdateReminder => {
            let req: UpdateReminderRequest = parse_args(op, args)?;
            validate_update(&req)?;
            let (id, update) = req.into_parts();
            builder.update_reminder(&id, &update)
        }
        Operation::DeleteReminder => {
            let req: DeleteReminderRequest = parse_args(op, args)?;
            validate_delete(&req)?;
            builder.delete_reminder(&req.id)
        }
        Operation::SearchReminders => {
            let req: SearchRemindersRequest = parse_args(op, args)?;
            builder.search_reminders(&req.term)
        }
    };
    Ok(script)
}
