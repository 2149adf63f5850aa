//! Generate-message command - branch, PR, and JIRA lines
//!
//! Looks up the first pull request for the current branch and prints three
//! lines with the branch name and derived URLs. Lookup failures collapse
//! into one generic message and never change the exit code.

use anyhow::Result;

use crate::color;
use crate::domain::ticket::{extract_jira_id, JIRA_BASE_URL, NO_JIRA_ID, PR_BASE_URL};
use crate::integrations::gh::{GhClient, RealGhClient};
use crate::integrations::git::{GitClient, RealGitClient};

/// Print the RAMA/PR/JIRA message for the current branch
///
/// # Errors
/// Never returns an error; all failures are caught and reported.
pub fn cmd_generate_message(color_mode: color::ColorMode) -> Result<()> {
    run_generate_message(&RealGitClient, &RealGhClient, color_mode)
}

pub(crate) fn run_generate_message(
    git: &impl GitClient,
    gh: &impl GhClient,
    color_mode: color::ColorMode,
) -> Result<()> {
    match build_message(git, gh) {
        Ok(lines) => {
            for line in lines {
                println!("{}", color_mode.green(&line));
            }
        }
        Err(_) => {
            eprintln!(
                "{}",
                color::error(
                    color_mode,
                    "Failed to generate the message. Ensure you are on a valid \
                     branch and logged in to GitHub CLI."
                )
            );
        }
    }
    Ok(())
}

fn build_message(git: &impl GitClient, gh: &impl GhClient) -> Result<[String; 3]> {
    let branch = git.current_branch()?;
    let pr_number = gh.first_pr_number(&branch)?;

    // No PR keeps the bare base URL, mirroring an empty lookup result
    let pr_segment = pr_number.map_or_else(String::new, |n| n.to_string());
    let jira_id = extract_jira_id(&branch).unwrap_or(NO_JIRA_ID);

    Ok([
        format!("RAMA: {branch}"),
        format!("PR: {PR_BASE_URL}{pr_segment}"),
        format!("JIRA: {JIRA_BASE_URL}{jira_id}"),
    ])
}
