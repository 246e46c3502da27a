// src/service.rs
// Stateless composition of builder -> bridge -> decoder
//
// Each operation builds exactly one script and awaits exactly one interpreter
// run. Nothing is cached between calls; the host store is the only state.

use crate::bridge::{Osascript, ScriptRunner};
use crate::config::EnvConfig;
use crate::decode::RecordDecoder;
use crate::error::{RemindersError, Result};
use crate::script::ScriptBuilder;
use crate::types::{NewReminder, Reminder, ReminderFilter, ReminderList, ReminderUpdate, priority};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct RemindersService {
    runner: Arc<dyn ScriptRunner>,
    builder: ScriptBuilder,
    decoder: RecordDecoder,
}

impl RemindersService {
    pub fn new(runner: Arc<dyn ScriptRunner>) -> Self {
        Self::with_builder(runner, ScriptBuilder::default())
    }

    /// The decoder always follows the builder's sentinel set
    pub fn with_builder(runner: Arc<dyn ScriptRunner>, builder: ScriptBuilder) -> Self {
        let decoder = RecordDecoder::new(*builder.delimiters());
        Self {
            runner,
            builder,
            decoder,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::with_builder(
            Arc::new(Osascript::new(config.program.clone())),
            ScriptBuilder::new(config.application.clone()),
        )
    }

    pub fn builder(&self) -> &ScriptBuilder {
        &self.builder
    }

    /// Values containing a sentinel will corrupt the record they are read back in
    fn warn_on_collision(&self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            let hits = self.builder.delimiters().collisions(value);
            if !hits.is_empty() {
                warn!(
                    field,
                    sentinels = ?hits,
                    "Value contains a record sentinel; reads of this reminder will be corrupted"
                );
            }
        }
    }

    pub async fn list_lists(&self) -> Result<Vec<ReminderList>> {
        let raw = self.runner.run(&self.builder.list_lists()).await?;
        let lists = self.decoder.lists(&raw)?;
        debug!(count = lists.len(), "Listed reminder lists");
        Ok(lists)
    }

    pub async fn list_reminders(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>> {
        let raw = self.runner.run(&self.builder.list_reminders(filter)).await?;
        Ok(self.decoder.reminders(&raw))
    }

    /// Create a reminder and return the host-assigned id
    pub async fn create_reminder(&self, new: &NewReminder) -> Result<String> {
        self.warn_on_collision("name", Some(&new.name));
        self.warn_on_collision("body", new.body.as_deref());

        let id = self.runner.run(&self.builder.create_reminder(new)).await?;
        if id.is_empty() {
            return Err(RemindersError::Decode(
                "create returned no reminder id".to_string(),
            ));
        }
        debug!(
            id = %id,
            list = %new.list_name,
            priority = new.priority.and_then(priority::label),
            "Created reminder"
        );
        Ok(id)
    }

    /// Partial update; a missing id surfaces as the host's failure
    pub async fn update_reminder(&self, id: &str, update: &ReminderUpdate) -> Result<()> {
        self.warn_on_collision("name", update.name.as_deref());
        self.warn_on_collision("body", update.body.as_deref());
        if update.is_empty() {
            debug!(id, "Update carries no fields; only resolving the reminder");
        }

        self.runner
            .run(&self.builder.update_reminder(id, update))
            .await?;
        Ok(())
    }

    pub async fn delete_reminder(&self, id: &str) -> Result<()> {
        self.runner.run(&self.builder.delete_reminder(id)).await?;
        debug!(id, "Deleted reminder");
        Ok(())
    }

    pub async fn search_reminders(&self, term: &str) -> Result<Vec<Reminder>> {
        let raw = self.runner.run(&self.builder.search_reminders(term)).await?;
        Ok(self.decoder.reminders(&raw))
    }
}
