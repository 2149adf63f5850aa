#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::Command;

/// A pull request entry as returned by `gh pr list --json number`
#[derive(Debug, Clone, Deserialize)]
struct PrEntry {
    number: u64,
}

/// Trait for interacting with GitHub CLI
pub trait GhClient {
    /// Get the number of the first open pull request whose head is `branch`
    ///
    /// Returns `None` when no pull request exists for the branch.
    fn first_pr_number(&self, branch: &str) -> Result<Option<u64>>;
}

/// Real implementation of `GhClient` using the `gh` CLI
#[derive(Debug, Default)]
pub struct RealGhClient;

impl GhClient for RealGhClient {
    fn first_pr_number(&self, branch: &str) -> Result<Option<u64>> {
        let output = Command::new("gh")
            .args(["pr", "list", "--head", branch, "--json", "number"])
            .output()
            .context("Failed to execute gh command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("gh pr list failed: {stderr}");
        }

        let json = String::from_utf8_lossy(&output.stdout);
        let entries: Vec<PrEntry> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse PR list JSON: {json}"))?;

        Ok(entries.first().map(|entry| entry.number))
    }
}
