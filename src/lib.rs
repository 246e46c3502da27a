// src/lib.rs
// Reminders - MCP bridge to the host task store

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod bridge;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod mcp;
pub mod script;
pub mod service;
pub mod types;

pub use bridge::{Osascript, ScriptRunner};
pub use error::{RemindersError, Result};
pub use script::{Operation, Script, ScriptBuilder};
pub use service::RemindersService;
