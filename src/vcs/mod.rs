//! Version control abstraction layer
//!
//! This module provides a trait-based abstraction over the version control
//! operations a release needs, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Vcs] trait. The concrete implementations
//! include:
//!
//! - [git2_backend::Git2Vcs]: A real implementation using the `git2` crate
//! - [mock::MockVcs]: A recording mock implementation for testing
//!
//! Most code should depend on the [Vcs] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use auto_release::vcs::Vcs;
//! # fn example<V: Vcs>(vcs: &V) -> Result<(), Box<dyn std::error::Error>> {
//! if vcs.has_uncommitted_changes()? {
//!     // refuse to release, or warn and continue
//! }
//! # Ok(())
//! # }
//! ```

pub mod git2_backend;
pub mod mock;

pub use git2_backend::Git2Vcs;
pub use mock::MockVcs;

use crate::error::Result;
use std::path::Path;

/// Common version control trait for the release pipeline.
///
/// Each method maps to one underlying repository operation. Implementations
/// report success or failure; the caller decides what a failure means for
/// the rest of the run. All methods are blocking and none retries
/// internally.
///
/// ## Implementations
///
/// - [Git2Vcs](git2_backend::Git2Vcs): Real Git implementation using the `git2` crate
/// - [MockVcs](mock::MockVcs): Test implementation recording every call
pub trait Vcs {
    /// Check whether the working tree has uncommitted changes.
    ///
    /// Equivalent to `git status --porcelain` producing non-empty output;
    /// untracked files count as changes.
    ///
    /// # Returns
    /// * `Ok(true)` - The tree is dirty
    /// * `Ok(false)` - The tree is clean
    /// * `Err` - If the status query itself fails
    fn has_uncommitted_changes(&self) -> Result<bool>;

    /// Stage the given paths for the next commit.
    ///
    /// # Arguments
    /// * `paths` - Paths relative to the repository root
    fn stage(&self, paths: &[&Path]) -> Result<()>;

    /// Create a commit from the currently staged changes.
    ///
    /// # Arguments
    /// * `message` - The commit message
    fn commit(&self, message: &str) -> Result<()>;

    /// Push a branch to a remote.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `branch` - Name of the branch (e.g., "main")
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create a lightweight tag on the current HEAD commit.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag (e.g., "v1.2.4")
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to a remote.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote
    /// * `name` - Name of the tag to push
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
