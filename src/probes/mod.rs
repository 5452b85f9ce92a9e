//! Probe implementations.
//!
//! Each submodule is one self-contained strategy for producing a candidate
//! path to the node binary:
//!
//! - `common_paths`: env override plus conventional install locations
//! - `path_lookup`: the platform's executable-lookup command
//! - `companion`: AppleScript query of a running companion app (macOS)
//! - `config_file`: `.appiumconfig.json` near the tool's install root
//!
//! Probes return `Result<Option<PathBuf>, ProbeError>`: `Ok(Some(_))` is a
//! filesystem-validated hit, `Ok(None)` is a clean miss, and `Err(_)` is a
//! failure the detector logs and treats as a miss.

pub(crate) mod common_paths;
pub(crate) mod companion;
pub(crate) mod config_file;
pub(crate) mod path_lookup;

pub use config_file::NodeConfig;

use crate::ProbeError;
use std::ffi::OsStr;
use std::path::Path;
use tokio::process::Command;

/// Run a program and capture a single candidate string from its stdout.
///
/// Enforces the probe subprocess contract: the command must exit
/// successfully, its output must fit within `limit` bytes and decode as
/// UTF-8, and trailing whitespace (including the newline every lookup
/// command appends) is stripped. Empty output is a clean miss, returned
/// before any path handling.
pub(crate) async fn capture_candidate(
    program: impl AsRef<OsStr>,
    args: &[&str],
    limit: usize,
) -> Result<Option<String>, ProbeError> {
    let program = program.as_ref();
    let name = program.to_string_lossy().into_owned();

    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| ProbeError::Spawn {
            program: name.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            program: name,
            status: output.status,
        });
    }

    if output.stdout.len() > limit {
        return Err(ProbeError::OutputTooLarge {
            program: name,
            limit,
        });
    }

    let text =
        String::from_utf8(output.stdout).map_err(|_| ProbeError::NonUtf8Output { program: name })?;

    let candidate = text.trim_end();
    if candidate.is_empty() {
        Ok(None)
    } else {
        Ok(Some(candidate.to_string()))
    }
}

/// Async existence check; any I/O error counts as "does not exist".
pub(crate) async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
