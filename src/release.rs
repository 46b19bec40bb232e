//! Release orchestration.
//!
//! Sequences the guarded steps of a release cut: dirty-check, test gate,
//! version bump, publish, and tag. The orchestrator holds handles to its
//! collaborators (version control, test runner, version store) so callers
//! and tests can substitute implementations.

use crate::error::Result;
use crate::store::VersionStore;
use crate::testrunner::TestRunner;
use crate::ui;
use crate::vcs::Vcs;
use crate::version::Version;
use crate::warning::ReleaseWarning;

/// Parameters for one release run.
///
/// Mirrors the CLI flags in a format suitable for orchestration logic.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRequest {
    /// Compute and report the release without mutating anything
    pub test_mode: bool,

    /// Proceed despite uncommitted local changes
    pub force: bool,

    /// Path to the changelog file; carried along but not consulted here
    pub changelog_path: String,
}

impl Default for ReleaseRequest {
    fn default() -> Self {
        ReleaseRequest {
            test_mode: false,
            force: false,
            changelog_path: "CHANGELOG.md".to_string(),
        }
    }
}

/// Result of a release run. Exactly one outcome is produced per run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// The release finished; in test mode this is the version that would
    /// have been released.
    Completed { version: Version },

    /// A guard stopped the run before any side effect occurred.
    Aborted { reason: String },

    /// A step failed; earlier steps are not rolled back.
    Failed { reason: String },
}

/// Sequences the release steps and decides success or abort at each gate.
///
/// Stateless between runs: all run state is local to one [execute]
/// invocation. Each step is a blocking call to a collaborator, and a
/// failing step ends the run immediately; there are no internal retries.
///
/// [execute]: ReleaseOrchestrator::execute
pub struct ReleaseOrchestrator<'a> {
    vcs: &'a dyn Vcs,
    runner: &'a dyn TestRunner,
    store: &'a dyn VersionStore,
    remote: String,
    branch: String,
}

impl<'a> ReleaseOrchestrator<'a> {
    /// Create an orchestrator over the given collaborators.
    ///
    /// # Arguments
    /// * `vcs` - Version control backend
    /// * `runner` - Test suite runner
    /// * `store` - Version file store
    /// * `remote` - Remote the release commit and tag are pushed to
    /// * `branch` - Integration branch the release commit is pushed to
    pub fn new(
        vcs: &'a dyn Vcs,
        runner: &'a dyn TestRunner,
        store: &'a dyn VersionStore,
        remote: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        ReleaseOrchestrator {
            vcs,
            runner,
            store,
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// Run the release pipeline.
    ///
    /// Steps, in order:
    /// 1. Dirty-check. A dirty tree aborts the run unless `force` is set,
    ///    in which case a warning is emitted and the run continues.
    /// 2. Test gate (skipped in test mode). Anything but a passing run
    ///    fails the release before any state is touched.
    /// 3. Version resolution: read, parse, and bump the patch component.
    ///    Runs in test mode too, to report what would be released.
    /// 4. Publish (skipped in test mode): write the version file, commit
    ///    exactly that file, push to the integration branch.
    /// 5. Tag (skipped in test mode): create `v<version>` and push it.
    ///
    /// Failures never roll back steps that already completed.
    pub fn execute(&self, request: &ReleaseRequest) -> ReleaseOutcome {
        match self.run(request) {
            Ok(outcome) => outcome,
            Err(e) => ReleaseOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn run(&self, request: &ReleaseRequest) -> Result<ReleaseOutcome> {
        if self.vcs.has_uncommitted_changes()? {
            if !request.force {
                return Ok(ReleaseOutcome::Aborted {
                    reason: "uncommitted changes".to_string(),
                });
            }
            ui::display_release_warning(&ReleaseWarning::ForcedDirtyTree);
        }

        if !request.test_mode {
            ui::display_status("Running tests before release...");
            if !matches!(self.runner.run(), Ok(true)) {
                return Ok(ReleaseOutcome::Failed {
                    reason: "tests failed".to_string(),
                });
            }
            ui::display_success("All tests passed");
        }

        let current = Version::parse(&self.store.read()?)?;
        let next = current.next_patch();

        if request.test_mode {
            return Ok(ReleaseOutcome::Completed { version: next });
        }

        self.publish(&next)?;

        if let Err(e) = self.tag(&next) {
            ui::display_release_warning(&ReleaseWarning::UntaggedRelease {
                version: next.to_string(),
            });
            return Ok(ReleaseOutcome::Failed {
                reason: e.to_string(),
            });
        }

        Ok(ReleaseOutcome::Completed { version: next })
    }

    /// Write the new version, then commit and push exactly that file.
    fn publish(&self, version: &Version) -> Result<()> {
        ui::display_status(&format!("Updating version file to {}", version));
        self.store.write(version)?;
        self.vcs.stage(&[self.store.path()])?;
        self.vcs
            .commit(&format!("Update version to {} for release", version))?;
        self.vcs.push_branch(&self.remote, &self.branch)?;
        Ok(())
    }

    fn tag(&self, version: &Version) -> Result<()> {
        let tag = format!("v{}", version);
        ui::display_status(&format!("Creating tag: {}", tag));
        self.vcs.create_tag(&tag)?;
        self.vcs.push_tag(&self.remote, &tag)?;
        Ok(())
    }
}
