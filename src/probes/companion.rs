//! Companion application query via OS automation scripting.

use crate::probes::{capture_candidate, path_exists};
use crate::{DetectOptions, ProbeError};
use std::ffi::OsStr;
use std::path::PathBuf;

/// AppleScript asking a running Appium app for its configured node path.
///
/// Yields the literal `NULL` when the app is not running or the query
/// fails; `NULL` then fails the existence check like any other bogus path.
const COMPANION_QUERY: &str = r#"try
  set appiumIsRunning to false
  tell application "System Events"
    set appiumIsRunning to name of every process contains "Appium"
  end tell
  if appiumIsRunning then
    tell application "Appium" to return node path
  end if
end try
return "NULL""#;

/// Ask the companion GUI app for its configured node path.
///
/// Only meaningful on macOS; on every other platform the probe is an
/// immediate miss. A missing automation interpreter is also a miss rather
/// than an error: with no interpreter there is nothing to ask.
pub(crate) async fn run(options: &DetectOptions) -> Result<Option<PathBuf>, ProbeError> {
    if !cfg!(target_os = "macos") {
        return Ok(None);
    }

    let interpreter = match which::which(&options.automation_program) {
        Ok(path) => path,
        Err(_) => return Ok(None),
    };

    query(interpreter, options.max_captured_output).await
}

async fn query(
    interpreter: impl AsRef<OsStr>,
    limit: usize,
) -> Result<Option<PathBuf>, ProbeError> {
    let candidate = match capture_candidate(interpreter, &["-e", COMPANION_QUERY], limit).await? {
        Some(candidate) => candidate,
        None => return Ok(None),
    };

    let path = PathBuf::from(candidate);
    if path_exists(&path).await {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}
