//! Executable lookup via the platform's shell command.

use crate::probes::{capture_candidate, path_exists};
use crate::{DetectOptions, ProbeError};
use std::path::PathBuf;

/// Ask the platform's lookup command (`which` / `where`) for the binary.
///
/// The command's stdout is captured, capped, and trimmed; the result is
/// only trusted after it passes the existence check.
pub(crate) async fn run(options: &DetectOptions) -> Result<Option<PathBuf>, ProbeError> {
    let candidate = match capture_candidate(
        &options.lookup_program,
        &[options.binary_name.as_str()],
        options.max_captured_output,
    )
    .await?
    {
        Some(candidate) => candidate,
        None => return Ok(None),
    };

    // `where` on Windows can print several matches, one per line
    let first = candidate.lines().next().unwrap_or_default().trim_end();
    if first.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(first);
    if path_exists(&path).await {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_validates_reported_path() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join("node");
        std::fs::write(&node, "").unwrap();

        // echo stands in for the lookup command: it prints its argument
        // followed by a newline, just as `which` prints the match
        let options = DetectOptions {
            lookup_program: "echo".to_string(),
            binary_name: node.to_string_lossy().into_owned(),
            ..Default::default()
        };

        let found = run(&options).await.unwrap();
        assert_eq!(found, Some(node));
    }

    #[tokio::test]
    async fn test_run_rejects_nonexistent_reported_path() {
        let options = DetectOptions {
            lookup_program: "echo".to_string(),
            binary_name: "/nonexistent/reported/node".to_string(),
            ..Default::default()
        };

        let found = run(&options).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_run_spawn_failure_is_error() {
        let options = DetectOptions {
            lookup_program: "/nonexistent/which".to_string(),
            ..Default::default()
        };

        let result = run(&options).await;
        assert!(matches!(result, Err(ProbeError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_run_takes_first_line_of_multiple_matches() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join("node");
        std::fs::write(&node, "").unwrap();

        // printf emits two matches; only the first should be considered
        let options = DetectOptions {
            lookup_program: "printf".to_string(),
            binary_name: format!("{}\n/other/match/node\n", node.display()),
            ..Default::default()
        };

        let found = run(&options).await.unwrap();
        assert_eq!(found, Some(node));
    }
}
