//! Node binary detection functions.

use crate::probes::{common_paths, companion, config_file, path_lookup};
use crate::{DetectOptions, Discovery, ProbeKind};
use std::path::PathBuf;
use tracing::{info, warn};

/// Detect the node binary on this host.
///
/// Runs the four probes in priority order and returns the first candidate
/// that exists on the filesystem:
///
/// 1. Common locations (`NODE_BIN` override, then conventional paths)
/// 2. The platform's executable-lookup command
/// 3. A running companion app, asked via OS automation (macOS only)
/// 4. The persisted `.appiumconfig.json` config file
///
/// Probes run strictly one after another and the chain stops at the first
/// hit. This function never returns an error: any failure inside a probe
/// is logged and counts as that probe finding nothing, and full exhaustion
/// is reported as `None` with a single warning-level log event.
///
/// # Example
///
/// ```rust,no_run
/// use node_discovery::detect;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match detect().await {
///         Some(path) => println!("node at {}", path.display()),
///         None => eprintln!("no node binary on this host"),
///     }
/// }
/// ```
pub async fn detect() -> Option<PathBuf> {
    detect_with_options(&DetectOptions::default()).await
}

/// Detect the node binary using custom [`DetectOptions`].
///
/// Same contract as [`detect`], with the environment variable name,
/// candidate list, external commands, and config location taken from
/// `options` instead of the defaults.
pub async fn detect_with_options(options: &DetectOptions) -> Option<PathBuf> {
    discover_with_options(options).await.map(|found| found.path)
}

/// Detect the node binary and report which probe found it.
///
/// Identical chain to [`detect`], returning a [`Discovery`] so callers
/// can surface how the binary was located.
pub async fn discover() -> Option<Discovery> {
    discover_with_options(&DetectOptions::default()).await
}

/// Detect with custom options, reporting which probe found the binary.
pub async fn discover_with_options(options: &DetectOptions) -> Option<Discovery> {
    for probe in ProbeKind::all() {
        if let Some(path) = run_probe(probe, options).await {
            return Some(Discovery { path, probe });
        }
    }

    warn!("node binary could not be found by any probe");
    None
}

/// Run one probe and fold its outcome into found-or-not.
///
/// Probe errors stop here: they are logged at informational level and
/// reported as a miss, so a broken strategy never blocks the ones after it.
async fn run_probe(kind: ProbeKind, options: &DetectOptions) -> Option<PathBuf> {
    let result = match kind {
        ProbeKind::CommonLocations => common_paths::run(options).await,
        ProbeKind::PathLookup => path_lookup::run(options).await,
        ProbeKind::CompanionApp => companion::run(options).await,
        ProbeKind::ConfigFile => config_file::run(options).await,
    };

    match result {
        Ok(Some(path)) => {
            info!(
                "node binary found by {} probe at {}",
                kind.display_name(),
                path.display()
            );
            Some(path)
        }
        Ok(None) => {
            info!("node binary not found by {} probe", kind.display_name());
            None
        }
        Err(error) => {
            info!("{} probe failed: {}", kind.display_name(), error);
            None
        }
    }
}
