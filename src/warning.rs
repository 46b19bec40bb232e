use std::fmt;

/// Warnings raised while a release run is in flight.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// A forced release is proceeding over uncommitted local changes
    ForcedDirtyTree,
    /// The version bump was committed and pushed but the tag step failed
    UntaggedRelease { version: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ForcedDirtyTree => {
                write!(
                    f,
                    "Forcing a release with uncommitted changes. This may lead to \
                     inconsistencies and errors. Please note the following:\n\
                     \n\
                     - Local changes will NOT be included in the release.\n\
                     - Only the version file will be updated and committed.\n\
                     - The released version may not match your local codebase.\n\
                     - Features, fixes, or dependencies in uncommitted changes will be \
                     missing from the release.\n\
                     \n\
                     To avoid potential issues, consider the following recommendations:\n\
                     \n\
                     1. Commit or stash your changes before releasing.\n\
                     2. Run 'git status' to review local changes.\n\
                     3. Consider re-running without --force.\n\
                     4. Seek guidance if unsure.\n\
                     \n\
                     Proceed with caution to avoid potential issues in the released version."
                )
            }
            ReleaseWarning::UntaggedRelease { version } => {
                write!(
                    f,
                    "Version {} was committed and pushed, but the tag step did not \
                     complete. The repository is untagged for this release; create and \
                     push the tag manually once the underlying issue is resolved.",
                    version
                )
            }
        }
    }
}
