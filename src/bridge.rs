// src/bridge.rs
// Interpreter bridge - runs a built script as a child process
//
// One process per call, no retries, no timeout. Non-zero exit and spawn
// failure both surface as a single failure carrying the host diagnostic.

use crate::error::{RemindersError, Result};
use crate::script::Script;
use async_trait::async_trait;
use regex::Regex;
use std::process::Stdio;
use std::sync::LazyLock;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Host error number for "can't get <object>" (missing target)
const ERR_NO_SUCH_OBJECT: i64 = -1728;
/// Host error number for "invalid index"
const ERR_INVALID_INDEX: i64 = -1719;

/// Error number the interpreter appends to its diagnostics, e.g. `(-1728)`
static ERROR_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This is a static literal regex pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"\((-?\d+)\)").expect("error number regex")
});

/// Executes scripts against the host. Implemented by the subprocess bridge and
/// by test doubles.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Run a script and return its trimmed standard output
    async fn run(&self, script: &Script) -> Result<String>;
}

/// Extract the host error number from a diagnostic, if one is present
pub fn error_number(diagnostic: &str) -> Option<i64> {
    ERROR_NUMBER_RE
        .captures_iter(diagnostic)
        .filter_map(|c| c.get(1)?.as_str().parse().ok())
        .last()
}

/// Map a failed invocation to a semantic failure kind by its error number
pub fn classify_failure(diagnostic: String) -> RemindersError {
    match error_number(&diagnostic) {
        Some(ERR_NO_SUCH_OBJECT | ERR_INVALID_INDEX) => RemindersError::NotFound { diagnostic },
        _ => RemindersError::Invocation { diagnostic },
    }
}

/// Combine stderr and stdout of a failed run into one diagnostic
fn failure_diagnostic(status: std::process::ExitStatus, stdout: &[u8], stderr: &[u8]) -> String {
    let parts: Vec<String> = [stderr, stdout]
        .iter()
        .map(|b| String::from_utf8_lossy(b).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        format!("interpreter exited with {}", status)
    } else {
        parts.join("\n")
    }
}

/// Subprocess bridge to the host scripting interpreter (`osascript` by default)
#[derive(Debug, Clone)]
pub struct Osascript {
    program: String,
}

impl Default for Osascript {
    fn default() -> Self {
        Self::new("osascript")
    }
}

impl Osascript {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Pass the script as one argv entry; no shell is involved.
    async fn execute(&self, text: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                warn!(program = %self.program, error = %e, "Failed to spawn interpreter");
                RemindersError::invocation(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let diagnostic = failure_diagnostic(output.status, &output.stdout, &output.stderr);
            warn!(status = %output.status, diagnostic = %diagnostic, "Interpreter failed");
            return Err(classify_failure(diagnostic));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a trivial script to confirm the interpreter is reachable
    pub async fn probe(&self) -> Result<()> {
        let out = self.execute("return \"ok\"").await?;
        if out == "ok" {
            Ok(())
        } else {
            Err(RemindersError::Decode(format!(
                "unexpected probe output: {:?}",
                out
            )))
        }
    }
}

#[async_trait]
impl ScriptRunner for Osascript {
    #[instrument(skip(self, script), fields(operation = %script.operation()))]
    async fn run(&self, script: &Script) -> Result<String> {
        debug!(bytes = script.as_str().len(), "Running script");
        let out = self.execute(script.as_str()).await?;
        debug!(bytes = out.len(), "Script completed");
        Ok(out)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records every script and replays queued results in order
    #[derive(Default)]
    pub struct MockRunner {
        responses: Mutex<VecDeque<Result<String>>>,
        scripts: Mutex<Vec<Script>>,
    }

    impl MockRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, output: &str) -> Self {
            self.push(Ok(output.to_string()));
            self
        }

        pub fn fail(self, err: RemindersError) -> Self {
            self.push(Err(err));
            self
        }

        fn push(&self, result: Result<String>) {
            self.responses.lock().unwrap().push_back(result);
        }

        pub fn scripts(&self) -> Vec<Script> {
            self.scripts.lock().unwrap().clone()
        }

        pub fn last_script(&self) -> Script {
            self.scripts().pop().expect("no script was run")
        }
    }

    #[async_trait]
    impl ScriptRunner for MockRunner {
        async fn run(&self, script: &Script) -> Result<String> {
            self.scripts.lock().unwrap().push(script.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }
}
