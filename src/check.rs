//! Prerequisite tool verification.
//!
//! A [`ToolCheck`] describes how to probe for one external tool: the probe
//! command plus the literal stdout prefix the tool identifies itself with.
//! [`ToolCheck::run`] spawns the command once with captured output and blocks
//! until it exits. Each check also carries the instructional line to show
//! when verification fails.
//!
//! The verdict depends only on the exit status and the output prefix. The
//! version token attached to a successful [`ToolReport`] is diagnostic detail
//! and never influences the result.
//!
//! # Example
//!
//! ```no_run
//! use check_lfs::git_lfs;
//!
//! match git_lfs().run() {
//!     Ok(report) => println!("found {}", report.reported),
//!     Err(err) => eprintln!("not usable: {}", err),
//! }
//! ```

use std::process::Command;

use crate::error::{CheckError, Result};

/// Instructional line printed when Git LFS cannot be verified.
///
/// Kept byte-identical to the message the pre-commit hook has always printed,
/// trailing URL included.
const GIT_LFS_INSTALL_HINT: &str = "Please install Git LFS for commiting {gif,mp4,jpg,png} files. See https://github.com/microsoft/vscode-docs#git-lfs-setup for instructions.";

/// The Git LFS probe used by the pre-commit guard.
///
/// Runs `git lfs --version` and expects the captured stdout to begin with
/// `git-lfs`, the identifier the extension prints ahead of its version.
pub fn git_lfs() -> ToolCheck {
    ToolCheck::new("git-lfs", "git", "git-lfs")
        .with_args(vec!["lfs".to_string(), "--version".to_string()])
        .with_install_hint(GIT_LFS_INSTALL_HINT)
}

/// Describes how to verify that one external tool is installed and usable.
pub struct ToolCheck {
    name: String,
    command: String,
    args: Vec<String>,
    output_prefix: String,
    install_hint: String,
}

/// What a verified tool reported about itself.
#[derive(Debug, Clone)]
pub struct ToolReport {
    /// First line of the tool's output, trimmed.
    pub reported: String,

    /// Version token extracted from the output, if one was found.
    pub version: Option<String>,
}

impl ToolCheck {
    /// Create a check for `command` whose output must start with `output_prefix`.
    pub fn new(name: &str, command: &str, output_prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            args: Vec::new(),
            output_prefix: output_prefix.to_string(),
            install_hint: String::new(),
        }
    }

    /// Add arguments to the probe command.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the instructional line shown when verification fails.
    pub fn with_install_hint(mut self, hint: &str) -> Self {
        self.install_hint = hint.to_string();
        self
    }

    /// The tool's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instructional line shown when verification fails.
    pub fn install_hint(&self) -> &str {
        &self.install_hint
    }

    /// Run the probe command once and verify the tool identified itself.
    ///
    /// The child's stdout and stderr are captured, never forwarded. Blocks
    /// until the child exits; there is no timeout and no retry. Every way the
    /// probe can fail maps to a [`CheckError`] variant.
    pub fn run(&self) -> Result<ToolReport> {
        tracing::debug!("Probing {} with '{}'", self.name, self.command_line());

        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|source| CheckError::SpawnFailed {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::CommandFailed {
                command: self.command_line(),
                code: output.status.code(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Prefix test runs on the raw capture: leading whitespace or a blank
        // first line fails verification.
        if !stdout.starts_with(&self.output_prefix) {
            return Err(CheckError::UnexpectedOutput {
                command: self.command_line(),
                expected: self.output_prefix.clone(),
                reported: stdout.lines().next().unwrap_or("").to_string(),
            });
        }

        Ok(ToolReport {
            reported: stdout.lines().next().unwrap_or("").trim().to_string(),
            version: extract_version(&stdout),
        })
    }

    /// The full probe command line, for error messages and logs.
    fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract a version token from probe output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
