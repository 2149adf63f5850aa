//! Ticket and branch-name encoding
//!
//! This module contains the encoding scheme shared by all commands: a branch
//! name carries a branch type, a ticket prefix, and a hyphenated description,
//! and a commit message is derived back from it.
//!
//! Canonical form: `{type}/{ticket}-{hyphenated-description}` where ticket is
//! either `ECOMDUTI-<1-6 digits>` or the sentinel `NO-TASK`.

use anyhow::Result;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Project code prepended to bare ticket numbers
pub const PROJECT_CODE: &str = "ECOMDUTI";

/// Sentinel ticket for work without a tracking task
pub const NO_TASK: &str = "NO-TASK";

/// Base URL for pull requests
pub const PR_BASE_URL: &str = "https://github.com/inditex/web-duttinodefront/pull/";

/// Base URL for JIRA tickets
pub const JIRA_BASE_URL: &str = "https://jira.inditex.com/jira/browse/";

/// Sentinel printed when no JIRA id can be extracted from a branch name
pub const NO_JIRA_ID: &str = "No JIRA ID found";

/// Maximum accepted description length
pub const MAX_DESCRIPTION_LEN: usize = 150;

static BARE_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,6}$").expect("bare ticket regex is valid"));

static FULL_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ECOMDUTI-\d{1,6}$").expect("full ticket regex is valid"));

static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("description regex is valid"));

static JIRA_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+-[0-9]+").expect("jira id regex is valid"));

/// Type of branch being created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Feature,
    Bugfix,
    Wip,
}

impl BranchKind {
    /// All branch kinds, in prompt display order
    pub const ALL: [Self; 3] = [Self::Feature, Self::Bugfix, Self::Wip];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bugfix => "bugfix",
            Self::Wip => "wip",
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(Self::Feature),
            "bugfix" => Ok(Self::Bugfix),
            "wip" => Ok(Self::Wip),
            _ => anyhow::bail!("Invalid branch type: {s}. Expected one of: feature, bugfix, wip"),
        }
    }
}

/// Normalize a ticket input to its canonical form
///
/// Accepted shapes:
/// - bare number (1-6 digits), rewritten to `ECOMDUTI-<number>`
/// - the literal `NO-TASK`, kept as-is
/// - `ECOMDUTI-<1-6 digits>`, kept as-is
///
/// # Errors
/// Returns an error naming the three accepted shapes for any other input.
pub fn normalize_ticket(input: &str) -> Result<String> {
    if BARE_TICKET.is_match(input) {
        return Ok(format!("{PROJECT_CODE}-{input}"));
    }
    if input == NO_TASK || FULL_TICKET.is_match(input) {
        return Ok(input.to_string());
    }
    anyhow::bail!(
        "The format is incorrect. It should be a number (up to 6 digits), \
         \"{PROJECT_CODE}-123456\", or \"{NO_TASK}\"."
    )
}

/// Validate a raw branch description
///
/// # Errors
/// Returns an error if the description is longer than 150 characters or
/// contains anything besides letters, digits, and spaces.
pub fn validate_description(input: &str) -> Result<()> {
    if input.len() > MAX_DESCRIPTION_LEN {
        anyhow::bail!("The description is too long. It should be 150 characters or less.");
    }
    if !DESCRIPTION.is_match(input) {
        anyhow::bail!("The description can only contain letters, numbers, and spaces.");
    }
    Ok(())
}

/// Format a validated description for use in a branch name
///
/// Trims the input and collapses every whitespace run to a single hyphen.
#[must_use]
pub fn format_description(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Build the canonical branch name from its three fields
///
/// The ticket must already be normalized and the description validated.
#[must_use]
pub fn build_branch_name(kind: BranchKind, ticket: &str, description: &str) -> String {
    format!("{kind}/{ticket}-{}", format_description(description))
}

/// Commit message fields decoded from a branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Ticket prefix: `NO-TASK` or `ECOMDUTI-<number>`
    pub prefix: String,
    /// Free-text description with hyphens restored to spaces
    pub description: String,
}

impl CommitInfo {
    /// Decode a branch name back into ticket prefix and description
    ///
    /// Only the part after the last `/` is considered. It must split on `-`
    /// into at least 3 segments, the first being `ECOMDUTI` or `NO`.
    ///
    /// # Errors
    /// Returns an error if the branch name does not match the expected shape.
    pub fn from_branch(branch: &str) -> Result<Self> {
        let short = branch.rsplit('/').next().unwrap_or(branch);
        let parts: Vec<&str> = short.split('-').collect();

        if parts.len() < 3 || (parts[0] != PROJECT_CODE && parts[0] != "NO") {
            anyhow::bail!("The branch name does not have the correct format");
        }

        let prefix = if parts[0] == "NO" {
            NO_TASK.to_string()
        } else {
            format!("{}-{}", parts[0], parts[1])
        };
        let description = parts[2..].join(" ");

        Ok(Self {
            prefix,
            description,
        })
    }

    /// Render the commit message: `[<prefix>]: <description>`
    #[must_use]
    pub fn message(&self) -> String {
        format!("[{}]: {}", self.prefix, self.description)
    }
}

/// Extract the first JIRA ticket id (`ABC-123` shape) from a branch name
#[must_use]
pub fn extract_jira_id(branch: &str) -> Option<&str> {
    JIRA_ID.find(branch).map(|m| m.as_str())
}
