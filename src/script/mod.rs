// src/script/mod.rs
// Command building for the host scripting interpreter
//
// - escape: literal and shell quoting layers
// - protocol: sentinels and record layout shared with the decoder
// - builder: one script per operation

pub mod builder;
pub mod escape;
pub mod protocol;

pub use builder::ScriptBuilder;
pub use protocol::Delimiters;

use crate::error::{RemindersError, Result};
use std::fmt;
use std::str::FromStr;

/// The fixed set of operations this layer can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListLists,
    ListReminders,
    CreateReminder,
    UpdateReminder,
    DeleteReminder,
    SearchReminders,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::ListLists,
        Operation::ListReminders,
        Operation::CreateReminder,
        Operation::UpdateReminder,
        Operation::DeleteReminder,
        Operation::SearchReminders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListLists => "listLists",
            Operation::ListReminders => "listReminders",
            Operation::CreateReminder => "createReminder",
            Operation::UpdateReminder => "updateReminder",
            Operation::DeleteReminder => "deleteReminder",
            Operation::SearchReminders => "searchReminders",
        }
    }

    /// Whether the result text is decoded into records
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Operation::ListLists | Operation::ListReminders | Operation::SearchReminders
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RemindersError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
                RemindersError::InvalidInput(format!(
                    "unknown operation '{}'. Use: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// A finished command, ready to hand to the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    operation: Operation,
    text: String,
}

impl Script {
    pub(crate) fn new(operation: Operation, text: String) -> Self {
        Self { operation, text }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Shell invocation line for this script: `<program> -e '<script>'`
    pub fn shell_line(&self, program: &str) -> String {
        format!("{} -e {}", program, escape::shell_single_quote(&self.text))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
