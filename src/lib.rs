//! check-lfs - Pre-commit guard that verifies Git LFS is installed.
//!
//! The repository tracks large media through Git LFS, so every commit first
//! confirms the extension is installed and answering. The guard runs
//! `git lfs --version` once with captured output and checks that the tool
//! identified itself. When it did, the hook stays silent and the commit
//! proceeds. When it did not, for any reason, the hook prints one
//! instructional line on stdout and blocks the commit.
//!
//! # Modules
//!
//! - [`check`] - Tool probing and output verification
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use check_lfs::git_lfs;
//!
//! let check = git_lfs();
//! match check.run() {
//!     Ok(report) => println!("found {}", report.reported),
//!     Err(_) => println!("{}", check.install_hint()),
//! }
//! ```

pub mod check;
pub mod error;

pub use check::{git_lfs, ToolCheck, ToolReport};
pub use error::{CheckError, Result};
