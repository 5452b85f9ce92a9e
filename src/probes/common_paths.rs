//! Common install location scan.

use crate::probes::path_exists;
use crate::{DetectOptions, ProbeError};
use std::path::PathBuf;

/// Scan the fixed candidate list and return the first existing path.
///
/// The env override slot comes first, then the static candidates in list
/// order. The environment is read here, at call time, so the probe stays
/// stateless with respect to process startup.
pub(crate) async fn run(options: &DetectOptions) -> Result<Option<PathBuf>, ProbeError> {
    for candidate in candidate_paths(options) {
        if path_exists(&candidate).await {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn candidate_paths(options: &DetectOptions) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(options.common_paths.len() + 1);
    if let Ok(value) = std::env::var(&options.env_var) {
        if !value.is_empty() {
            candidates.push(PathBuf::from(value));
        }
    }
    candidates.extend(options.common_paths.iter().cloned());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_paths_without_env() {
        let options = DetectOptions {
            env_var: "NODE_DISCOVERY_TEST_UNSET_VAR".to_string(),
            ..Default::default()
        };
        let candidates = candidate_paths(&options);
        assert_eq!(candidates, options.common_paths);
    }

    #[test]
    fn test_candidate_paths_env_override_comes_first() {
        let options = DetectOptions {
            env_var: "NODE_DISCOVERY_TEST_OVERRIDE_VAR".to_string(),
            ..Default::default()
        };
        std::env::set_var(&options.env_var, "/custom/bin/node");
        let candidates = candidate_paths(&options);
        std::env::remove_var(&options.env_var);

        assert_eq!(candidates[0], PathBuf::from("/custom/bin/node"));
        assert_eq!(&candidates[1..], options.common_paths.as_slice());
    }

    #[test]
    fn test_candidate_paths_empty_env_is_skipped() {
        let options = DetectOptions {
            env_var: "NODE_DISCOVERY_TEST_EMPTY_VAR".to_string(),
            ..Default::default()
        };
        std::env::set_var(&options.env_var, "");
        let candidates = candidate_paths(&options);
        std::env::remove_var(&options.env_var);

        assert_eq!(candidates, options.common_paths);
    }

    #[tokio::test]
    async fn test_run_returns_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("node-a");
        let second = dir.path().join("node-b");
        std::fs::write(&first, "").unwrap();
        std::fs::write(&second, "").unwrap();

        let options = DetectOptions {
            env_var: "NODE_DISCOVERY_TEST_RUN_UNSET".to_string(),
            common_paths: vec![
                dir.path().join("missing"),
                first.clone(),
                second,
            ],
            ..Default::default()
        };

        let found = run(&options).await.unwrap();
        assert_eq!(found, Some(first));
    }

    #[tokio::test]
    async fn test_run_misses_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let options = DetectOptions {
            env_var: "NODE_DISCOVERY_TEST_RUN_MISS".to_string(),
            common_paths: vec![dir.path().join("missing-a"), dir.path().join("missing-b")],
            ..Default::default()
        };

        let found = run(&options).await.unwrap();
        assert_eq!(found, None);
    }
}
