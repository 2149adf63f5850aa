//! Branch command - interactive branch creation
//!
//! Collects branch type, ticket, and description, derives the canonical
//! branch name, and checks it out with `git checkout -b`.

use anyhow::Result;

use crate::color;
use crate::domain::ticket::{self, BranchKind};
use crate::integrations::git::{GitClient, RealGitClient};
use crate::prompt::{Prompter, TerminalPrompter};

/// The three validated fields a branch name is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDetails {
    pub kind: BranchKind,
    /// Normalized ticket (`ECOMDUTI-<n>` or `NO-TASK`)
    pub ticket: String,
    /// Raw description, not yet hyphenated
    pub description: String,
}

/// Create a new branch from interactively collected details
///
/// # Errors
/// Returns an error if `git checkout -b` fails. Prompt errors never
/// propagate; the collection loop restarts instead.
pub fn cmd_branch(color_mode: color::ColorMode) -> Result<()> {
    run_branch(&RealGitClient, &mut TerminalPrompter, color_mode)
}

pub(crate) fn run_branch(
    git: &impl GitClient,
    prompter: &mut impl Prompter,
    color_mode: color::ColorMode,
) -> Result<()> {
    // Restart the whole three-field collection on any prompting error,
    // with no retry cap.
    let details = loop {
        match collect_branch_details(prompter, color_mode) {
            Ok(details) => break details,
            Err(err) => {
                eprintln!(
                    "{}",
                    color::error(
                        color_mode,
                        format!(
                            "An error occurred while getting branch details. \
                             Please try again. ({err})"
                        )
                    )
                );
            }
        }
    };

    let branch_name =
        ticket::build_branch_name(details.kind, &details.ticket, &details.description);

    eprintln!(
        "{}",
        color::info(color_mode, format!("Branch type: {}", details.kind))
    );
    eprintln!(
        "{}",
        color::info(color_mode, format!("Ticket name: {}", details.ticket))
    );
    eprintln!(
        "{}",
        color::info(
            color_mode,
            format!(
                "Formatted description: {}",
                ticket::format_description(&details.description)
            )
        )
    );
    eprintln!(
        "{}",
        color::info(color_mode, format!("Creating branch: {branch_name}"))
    );

    git.create_branch(&branch_name)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Branch {branch_name} created successfully")
        )
    );

    Ok(())
}

/// Collect and validate the three branch fields
///
/// Ticket and description validation errors re-ask the same field inline;
/// only read failures propagate to the caller.
fn collect_branch_details(
    prompter: &mut impl Prompter,
    color_mode: color::ColorMode,
) -> Result<BranchDetails> {
    let kind_names: Vec<&str> = BranchKind::ALL.iter().map(|k| k.as_str()).collect();
    let index = prompter.select("Select the type of branch:", &kind_names)?;
    let kind = BranchKind::ALL[index];

    let ticket = loop {
        let answer = prompter.input("Enter the ticket name (number only or \"NO-TASK\"):")?;
        match ticket::normalize_ticket(&answer) {
            Ok(normalized) => break normalized,
            Err(err) => eprintln!("{}", color::error(color_mode, err)),
        }
    };

    let description = loop {
        let answer = prompter.input(
            "Enter the branch description (max 150 characters, only letters, numbers, and spaces):",
        )?;
        match ticket::validate_description(&answer) {
            Ok(()) => break answer,
            Err(err) => eprintln!("{}", color::error(color_mode, err)),
        }
    };

    Ok(BranchDetails {
        kind,
        ticket,
        description,
    })
}
