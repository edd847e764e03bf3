use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::process::Command;

#[derive(Debug)]
pub(super) enum ToolError {
    Spawn(io::Error),
    TimedOut,
}

/// Runs an external tool to completion, killing it if `timeout` elapses first.
pub(super) async fn run_tool(mut command: Command, timeout: Duration) -> Result<Output, ToolError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = command.spawn().map_err(ToolError::Spawn)?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output.map_err(ToolError::Spawn),
        Err(_) => Err(ToolError::TimedOut),
    }
}

pub(super) fn stderr_excerpt(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        format!("exit status {}", output.status)
    } else {
        trimmed.lines().last().unwrap_or(trimmed).to_string()
    }
}
