#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::process::Command;

/// Git client interface for branch and commit operations
pub trait GitClient {
    /// Create and check out a new branch
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Get the current branch's short name
    fn current_branch(&self) -> Result<String>;

    /// Create a commit with the given message, allowing an empty diff
    fn commit(&self, message: &str) -> Result<()>;
}

/// Real git implementation
///
/// Arguments are always passed as an argument vector, never through a shell,
/// so branch names and commit messages cannot be interpreted as shell syntax.
#[derive(Debug, Default)]
pub struct RealGitClient;

impl GitClient for RealGitClient {
    fn create_branch(&self, name: &str) -> Result<()> {
        let output = Command::new("git")
            .args(["checkout", "-b", name])
            .output()
            .context("Failed to execute git checkout -b")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git checkout -b failed: {stderr}");
        }

        Ok(())
    }

    fn current_branch(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["symbolic-ref", "--short", "HEAD"])
            .output()
            .context("Failed to execute git symbolic-ref")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to get the branch name: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let output = Command::new("git")
            .args(["commit", "--allow-empty", "-m", message])
            .output()
            .context("Failed to execute git commit")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git commit failed: {stderr}");
        }

        Ok(())
    }
}
