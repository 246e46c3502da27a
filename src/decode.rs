// src/decode.rs
// Record decoding for interpreter output
//
// Reminder results: one record per line, fields joined by the field separator in
// the fixed slot order from `script::protocol`. Short lines never fail; missing
// slots decode as absent. Line-break markers in free-text slots are turned back
// into newlines. List results: two item-joined groups (names, ids)
// around the group separator, paired by position.

use crate::error::{RemindersError, Result};
use crate::script::protocol::{Delimiters, REMINDER_SLOTS, Slot, TRUE_LITERAL};
use crate::types::{Reminder, ReminderList};
use tracing::{debug, warn};

/// `true` only for the exact boolean-true literal
pub fn decode_completed(raw: &str) -> bool {
    raw == TRUE_LITERAL
}

/// Integer priority; empty or unparsable text decodes to 0
pub fn decode_priority(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder {
    delimiters: Delimiters,
}

impl RecordDecoder {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    /// Decode every non-blank line into a reminder, preserving order
    pub fn reminders(&self, raw: &str) -> Vec<Reminder> {
        let reminders: Vec<Reminder> = raw
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.reminder(line))
            .collect();
        debug!(count = reminders.len(), "Decoded reminder records");
        reminders
    }

    /// Decode one record line. Never fails: required slots fall back to
    /// empty/false, optional slots to absent.
    pub fn reminder(&self, line: &str) -> Reminder {
        let slots: Vec<&str> = line.split(self.delimiters.field).collect();
        if slots.len() != REMINDER_SLOTS {
            warn!(
                expected = REMINDER_SLOTS,
                found = slots.len(),
                "Reminder record has unexpected slot count"
            );
        }
        let slot = |s: Slot| slots.get(s as usize).copied();
        let required = |s: Slot| slot(s).unwrap_or_default().to_string();
        let text = |s: Slot| self.restore_line_breaks(slot(s).unwrap_or_default());

        Reminder {
            id: required(Slot::Id),
            name: text(Slot::Name),
            body: slot(Slot::Body)
                .filter(|b| *b != self.delimiters.absent)
                .map(|b| self.restore_line_breaks(b)),
            completed: slot(Slot::Completed).is_some_and(decode_completed),
            list: text(Slot::List),
            due_date: self.optional(slot(Slot::DueDate)),
            priority: slot(Slot::Priority).map(decode_priority).unwrap_or(0),
            creation_date: self.optional(slot(Slot::CreationDate)),
            modification_date: self.optional(slot(Slot::ModificationDate)),
        }
    }

    fn restore_line_breaks(&self, raw: &str) -> String {
        raw.replace(self.delimiters.line_break, "\n")
    }

    /// Empty text and the absent marker both mean "not set" for these slots
    fn optional(&self, raw: Option<&str>) -> Option<String> {
        raw.filter(|v| !v.is_empty() && *v != self.delimiters.absent)
            .map(str::to_string)
    }

    /// Pair list names with list ids by position
    pub fn lists(&self, raw: &str) -> Result<Vec<ReminderList>> {
        let (names, ids) = raw.split_once(self.delimiters.group).ok_or_else(|| {
            RemindersError::Decode(format!(
                "list result has no '{}' separator",
                self.delimiters.group
            ))
        })?;

        let names = self.items(names);
        let ids = self.items(ids);
        if names.len() != ids.len() {
            return Err(RemindersError::Decode(format!(
                "list result has {} names but {} ids",
                names.len(),
                ids.len()
            )));
        }

        Ok(names
            .into_iter()
            .zip(ids)
            .map(|(name, id)| ReminderList {
                name: name.to_string(),
                id: id.to_string(),
            })
            .collect())
    }

    fn items<'a>(&self, group: &'a str) -> Vec<&'a str> {
        if group.is_empty() {
            Vec::new()
        } else {
            group.split(self.delimiters.item).collect()
        }
    }
}
