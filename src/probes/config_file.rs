//! Persisted config file probe.

use crate::probes::path_exists;
use crate::{DetectOptions, ProbeError};
use serde::Deserialize;
use std::path::PathBuf;

/// File name of the persisted configuration document.
pub const CONFIG_FILE_NAME: &str = ".appiumconfig.json";

/// The recognized shape of `.appiumconfig.json`.
///
/// Only `node_bin` is read; unknown fields are ignored. The file is never
/// written by this crate.
///
/// ```json
/// { "node_bin": "/usr/local/bin/node" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Configured path to the node executable, if any.
    pub node_bin: Option<PathBuf>,
}

/// Read the config file and validate its `node_bin` entry.
///
/// A missing file, an absent `node_bin` field, or a `node_bin` that does
/// not exist on the filesystem are clean misses. Read and parse failures
/// surface as probe errors for the detector to log and swallow.
pub(crate) async fn run(options: &DetectOptions) -> Result<Option<PathBuf>, ProbeError> {
    let path = match options.config_path.clone().or_else(default_config_path) {
        Some(path) => path,
        None => return Ok(None),
    };

    if !path_exists(&path).await {
        return Ok(None);
    }

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ProbeError::ConfigRead {
            path: path.clone(),
            source,
        })?;

    let config: NodeConfig =
        serde_json::from_str(&raw).map_err(|source| ProbeError::ConfigParse { path, source })?;

    let node_bin = match config.node_bin {
        Some(node_bin) => node_bin,
        None => return Ok(None),
    };

    if path_exists(&node_bin).await {
        Ok(Some(node_bin))
    } else {
        Ok(None)
    }
}

/// Conventional config location: two directories above the running
/// executable, matching where the tool keeps its install-root dotfiles.
fn default_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.ancestors().nth(3).map(|root| root.join(CONFIG_FILE_NAME))
}
