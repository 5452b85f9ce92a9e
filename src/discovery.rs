//! Discovery result types and the probe failure taxonomy.

use crate::ProbeKind;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A successfully discovered node binary.
///
/// Pairs the validated path with the probe that produced it, so callers
/// can report how the binary was located.
///
/// # Example
///
/// ```rust,no_run
/// use node_discovery::discover;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     if let Some(found) = discover().await {
///         println!("node at {} (via {})", found.path.display(), found.probe.display_name());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Path to the node executable, validated to exist on the filesystem.
    pub path: PathBuf,

    /// The probe that produced the path.
    pub probe: ProbeKind,
}

/// Failures local to a single probe.
///
/// These never reach the caller of [`detect`](crate::detect): the detector
/// logs them at informational level and treats the probe as having found
/// nothing. They exist so that "swallowed" failures are represented as
/// data rather than silently discarded, which keeps the ignore policy
/// visible and testable.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new failure
/// types in future versions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The external command could not be spawned.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The external command ran but exited with a non-zero status.
    #[error("{program} exited with {status}")]
    CommandFailed {
        /// The program that was run.
        program: String,
        /// Its exit status.
        status: ExitStatus,
    },

    /// Captured output exceeded the configured size cap.
    #[error("{program} produced more than {limit} bytes of output")]
    OutputTooLarge {
        /// The program that was run.
        program: String,
        /// The cap that was exceeded, in bytes.
        limit: usize,
    },

    /// Captured output was not valid UTF-8.
    #[error("{program} produced non-UTF-8 output")]
    NonUtf8Output {
        /// The program that was run.
        program: String,
    },

    /// The config file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file was read but is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
