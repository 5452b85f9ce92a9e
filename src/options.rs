//! Detection options configuration.
//!
//! This module provides the [`DetectOptions`] struct for configuring
//! how the node binary is searched for, including the override environment
//! variable, the static candidate list, and the external commands used by
//! the lookup and companion-app probes.

use std::path::PathBuf;

/// Environment variable consulted for a node binary override.
pub const NODE_BIN_ENV: &str = "NODE_BIN";

/// Upper bound on captured subprocess output, in bytes.
///
/// Output beyond this cap fails the probe that produced it.
pub const MAX_CAPTURED_OUTPUT: usize = 524_288;

/// Configuration options for node binary detection.
///
/// This struct allows customization of the detection process: which
/// environment variable names an override, which static locations are
/// scanned, and which external programs the subprocess-backed probes run.
/// The defaults reproduce conventional behavior and are what
/// [`detect`](crate::detect) uses; embedders and tests can substitute any
/// field to redirect a probe.
///
/// # Default Behavior
///
/// The override variable is `NODE_BIN`, the static candidates are
/// `/usr/local/bin/node` and `/opt/local/bin/node`, the lookup command is
/// `which` (`where` on Windows), the automation interpreter is
/// `osascript`, the config file is resolved relative to the running
/// executable, and captured output is capped at 524288 bytes.
///
/// # Example
///
/// ```rust
/// use node_discovery::DetectOptions;
/// use std::path::PathBuf;
///
/// // Use default options
/// let opts = DetectOptions::default();
///
/// // Scan a custom install location instead of the conventional ones
/// let opts = DetectOptions {
///     common_paths: vec![PathBuf::from("/opt/node/bin/node")],
///     ..Default::default()
/// };
///
/// // Read the config file from an explicit location
/// let opts = DetectOptions {
///     config_path: Some(PathBuf::from("/etc/tool/.appiumconfig.json")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Environment variable naming an override path.
    ///
    /// Read fresh on every detection call, never cached; an unset or
    /// empty variable skips the override slot entirely.
    ///
    /// Default: `NODE_BIN`
    pub env_var: String,

    /// Static candidate paths scanned after the env override, in order.
    ///
    /// List order is the tie-break among these candidates.
    ///
    /// Default: `/usr/local/bin/node`, `/opt/local/bin/node`
    pub common_paths: Vec<PathBuf>,

    /// Name of the binary the PATH-lookup probe searches for.
    ///
    /// Default: `node`
    pub binary_name: String,

    /// The executable-lookup command spawned by the PATH-lookup probe.
    ///
    /// Default: `which` (`where` on Windows)
    pub lookup_program: String,

    /// The scripting interpreter spawned by the companion-app probe.
    ///
    /// Only used on macOS; the probe is a no-op elsewhere.
    ///
    /// Default: `osascript`
    pub automation_program: String,

    /// Explicit config file path for the config-file probe.
    ///
    /// `None` resolves the conventional location: `.appiumconfig.json`
    /// two directories above the running executable.
    ///
    /// Default: `None`
    pub config_path: Option<PathBuf>,

    /// Cap on captured subprocess output, in bytes.
    ///
    /// Default: 524288
    pub max_captured_output: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            env_var: NODE_BIN_ENV.to_string(),
            common_paths: vec![
                PathBuf::from("/usr/local/bin/node"),
                PathBuf::from("/opt/local/bin/node"),
            ],
            binary_name: "node".to_string(),
            lookup_program: default_lookup_program().to_string(),
            automation_program: "osascript".to_string(),
            config_path: None,
            max_captured_output: MAX_CAPTURED_OUTPUT,
        }
    }
}

fn default_lookup_program() -> &'static str {
    if cfg!(windows) {
        "where"
    } else {
        "which"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_env_var() {
        let opts = DetectOptions::default();
        assert_eq!(opts.env_var, "NODE_BIN");
    }

    #[test]
    fn test_default_common_paths_order() {
        let opts = DetectOptions::default();
        assert_eq!(
            opts.common_paths,
            vec![
                PathBuf::from("/usr/local/bin/node"),
                PathBuf::from("/opt/local/bin/node"),
            ]
        );
    }

    #[test]
    fn test_default_lookup_program() {
        let opts = DetectOptions::default();
        if cfg!(windows) {
            assert_eq!(opts.lookup_program, "where");
        } else {
            assert_eq!(opts.lookup_program, "which");
        }
    }

    #[test]
    fn test_default_output_cap() {
        let opts = DetectOptions::default();
        assert_eq!(opts.max_captured_output, 524_288);
    }

    #[test]
    fn test_custom_options() {
        let opts = DetectOptions {
            binary_name: "nodejs".to_string(),
            config_path: Some(PathBuf::from("/tmp/.appiumconfig.json")),
            ..Default::default()
        };
        assert_eq!(opts.binary_name, "nodejs");
        assert_eq!(
            opts.config_path.as_deref(),
            Some(std::path::Path::new("/tmp/.appiumconfig.json"))
        );
        assert_eq!(opts.automation_program, "osascript");
    }

    #[test]
    fn test_clone() {
        let opts = DetectOptions {
            env_var: "ALT_NODE_BIN".to_string(),
            ..Default::default()
        };
        let cloned = opts.clone();
        assert_eq!(opts.env_var, cloned.env_var);
        assert_eq!(opts.common_paths, cloned.common_paths);
    }
}
