//! Commit command - formatted commit from the current branch name

use anyhow::Result;

use crate::color;
use crate::domain::ticket::CommitInfo;
use crate::integrations::git::{GitClient, RealGitClient};

/// Create a commit whose message is decoded from the current branch name
///
/// # Errors
/// Returns an error only if commit creation itself fails. Branch-query and
/// decode failures are reported and the process still exits 0.
pub fn cmd_commit(color_mode: color::ColorMode) -> Result<()> {
    run_commit(&RealGitClient, color_mode)
}

pub(crate) fn run_commit(git: &impl GitClient, color_mode: color::ColorMode) -> Result<()> {
    let message = match derive_message(git) {
        Ok(message) => message,
        Err(err) => {
            eprintln!(
                "{}",
                color::error(
                    color_mode,
                    format!(
                        "The branch name does not have the correct format \
                         or an error occurred. ({err})"
                    )
                )
            );
            return Ok(());
        }
    };

    println!("{message}");

    git.commit(&message)?;

    eprintln!(
        "{}",
        color::success(color_mode, "Commit created successfully")
    );

    Ok(())
}

fn derive_message(git: &impl GitClient) -> Result<String> {
    let branch = git.current_branch()?;
    let info = CommitInfo::from_branch(&branch)?;
    Ok(info.message())
}
