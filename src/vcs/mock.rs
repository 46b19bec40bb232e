use crate::error::{ReleaseError, Result};
use crate::vcs::Vcs;
use std::cell::RefCell;
use std::path::Path;

/// Mock version control backend for testing without actual git operations.
///
/// Records every call in order so tests can assert exactly which repository
/// operations a run performed, and can be scripted to report a dirty tree
/// or to fail a single named operation.
pub struct MockVcs {
    dirty: bool,
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl MockVcs {
    /// Create a mock backend with a clean working tree
    pub fn new() -> Self {
        MockVcs {
            dirty: false,
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Report a dirty working tree from the status check
    pub fn with_dirty_tree(mut self) -> Self {
        self.dirty = true;
        self
    }

    /// Fail the named operation ("stage", "commit", "push", "tag", "push-tag")
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    /// The ordered list of operations performed so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn check_failure(&self, operation: &'static str) -> Result<()> {
        if self.fail_on == Some(operation) {
            return Err(ReleaseError::vcs(format!(
                "simulated {} failure",
                operation
            )));
        }
        Ok(())
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for MockVcs {
    fn has_uncommitted_changes(&self) -> Result<bool> {
        self.record("status".to_string());
        self.check_failure("status")?;
        Ok(self.dirty)
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        self.record(format!("stage {}", joined.join(" ")));
        self.check_failure("stage")
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit {}", message));
        self.check_failure("commit")
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {} {}", remote, branch));
        self.check_failure("push")
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(format!("tag {}", name));
        self.check_failure("tag")
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.record(format!("push-tag {} {}", remote, name));
        self.check_failure("push-tag")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_vcs_records_calls_in_order() {
        let vcs = MockVcs::new();
        vcs.commit("message").unwrap();
        vcs.create_tag("v1.0.0").unwrap();
        assert_eq!(vcs.calls(), vec!["commit message", "tag v1.0.0"]);
    }

    #[test]
    fn test_mock_vcs_dirty_tree() {
        let clean = MockVcs::new();
        assert!(!clean.has_uncommitted_changes().unwrap());

        let dirty = MockVcs::new().with_dirty_tree();
        assert!(dirty.has_uncommitted_changes().unwrap());
    }

    #[test]
    fn test_mock_vcs_failure_injection() {
        let vcs = MockVcs::new().failing_on("push");
        assert!(vcs.commit("ok").is_ok());
        assert!(vcs.push_branch("origin", "main").is_err());
        // The failing call is still recorded
        assert_eq!(vcs.calls(), vec!["commit ok", "push origin main"]);
    }

    #[test]
    fn test_mock_vcs_stage_records_paths() {
        let vcs = MockVcs::new();
        vcs.stage(&[Path::new("src/__about__.py")]).unwrap();
        assert_eq!(vcs.calls(), vec!["stage src/__about__.py"]);
    }
}
