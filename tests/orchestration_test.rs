// tests/orchestration_test.rs
use std::fs;
use std::path::Path;

use auto_release::error::Result;
use auto_release::release::{ReleaseOrchestrator, ReleaseOutcome, ReleaseRequest};
use auto_release::store::{FileVersionStore, VersionStore};
use auto_release::testrunner::TestRunner;
use auto_release::vcs::MockVcs;
use auto_release::version::Version;

struct PassingRunner;
impl TestRunner for PassingRunner {
    fn run(&self) -> Result<bool> {
        Ok(true)
    }
}

struct FailingRunner;
impl TestRunner for FailingRunner {
    fn run(&self) -> Result<bool> {
        Ok(false)
    }
}

/// Write a metadata file and a version file into a temp dir and return a
/// file-backed store over them.
fn file_store_in(dir: &Path, current: &str) -> FileVersionStore {
    let metadata = dir.join("pyproject.toml");
    fs::write(
        &metadata,
        format!("[project]\nname = \"demo\"\nversion = \"{}\"\n", current),
    )
    .unwrap();

    let version_file = dir.join("__about__.py");
    fs::write(
        &version_file,
        format!("__version__ = \"{}\"\n__license__ = \"MIT\"\n", current),
    )
    .unwrap();

    FileVersionStore::new(metadata, version_file)
}

#[test]
fn test_release_with_file_backed_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "1.2.3");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    let outcome = orchestrator.execute(&ReleaseRequest::default());

    assert_eq!(
        outcome,
        ReleaseOutcome::Completed {
            version: Version::new(1, 2, 4)
        }
    );

    // The version file was rewritten in place, other lines untouched
    let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
    assert_eq!(content, "__version__ = \"1.2.4\"\n__license__ = \"MIT\"\n");

    // The metadata read source is never written
    let metadata = fs::read_to_string(dir.path().join("pyproject.toml")).unwrap();
    assert!(metadata.contains("version = \"1.2.3\""));

    // The commit staged exactly the version file and the tag carries a v prefix
    let calls = vcs.calls();
    assert!(calls
        .iter()
        .any(|c| c.starts_with("stage") && c.ends_with("__about__.py")));
    assert!(calls.contains(&"commit Update version to 1.2.4 for release".to_string()));
    assert!(calls.contains(&"tag v1.2.4".to_string()));
    assert!(calls.contains(&"push-tag origin v1.2.4".to_string()));
}

#[test]
fn test_release_test_mode_leaves_files_untouched() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "0.4.9");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &FailingRunner, &store, "origin", "main");

    let request = ReleaseRequest {
        test_mode: true,
        ..ReleaseRequest::default()
    };
    let outcome = orchestrator.execute(&request);

    assert_eq!(
        outcome,
        ReleaseOutcome::Completed {
            version: Version::new(0, 4, 10)
        }
    );
    assert_eq!(vcs.calls(), vec!["status"]);

    let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
    assert!(content.contains("__version__ = \"0.4.9\""));

    // A second run computes the same would-be version
    assert_eq!(orchestrator.execute(&request), outcome);
}

#[test]
fn test_release_aborts_on_dirty_tree_before_touching_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "1.0.0");
    let vcs = MockVcs::new().with_dirty_tree();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    let outcome = orchestrator.execute(&ReleaseRequest::default());

    assert_eq!(
        outcome,
        ReleaseOutcome::Aborted {
            reason: "uncommitted changes".to_string()
        }
    );
    assert_eq!(vcs.calls(), vec!["status"]);

    let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
    assert!(content.contains("__version__ = \"1.0.0\""));
}

#[test]
fn test_release_forced_on_dirty_tree_completes() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "1.0.0");
    let vcs = MockVcs::new().with_dirty_tree();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    let outcome = orchestrator.execute(&ReleaseRequest {
        force: true,
        ..ReleaseRequest::default()
    });

    assert_eq!(
        outcome,
        ReleaseOutcome::Completed {
            version: Version::new(1, 0, 1)
        }
    );

    let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
    assert!(content.contains("__version__ = \"1.0.1\""));
}

#[test]
fn test_release_fails_on_failing_tests_without_writing() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "1.0.0");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &FailingRunner, &store, "origin", "main");

    let outcome = orchestrator.execute(&ReleaseRequest::default());

    assert_eq!(
        outcome,
        ReleaseOutcome::Failed {
            reason: "tests failed".to_string()
        }
    );
    assert_eq!(vcs.calls(), vec!["status"]);

    let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
    assert!(content.contains("__version__ = \"1.0.0\""));
}

#[test]
fn test_release_fails_on_corrupt_metadata_version() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "1.0");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    let outcome = orchestrator.execute(&ReleaseRequest::default());

    assert!(matches!(outcome, ReleaseOutcome::Failed { .. }));

    // No publish step ran
    assert_eq!(vcs.calls(), vec!["status"]);
}

#[test]
fn test_changelog_path_is_carried_but_not_consulted() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "2.0.0");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    // The changelog file does not exist; the run must not care
    let outcome = orchestrator.execute(&ReleaseRequest {
        changelog_path: dir.path().join("does-not-exist.md").display().to_string(),
        ..ReleaseRequest::default()
    });

    assert_eq!(
        outcome,
        ReleaseOutcome::Completed {
            version: Version::new(2, 0, 1)
        }
    );
}

#[test]
fn test_store_path_is_what_gets_staged() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = file_store_in(dir.path(), "3.1.4");
    let vcs = MockVcs::new();
    let orchestrator = ReleaseOrchestrator::new(&vcs, &PassingRunner, &store, "origin", "main");

    orchestrator.execute(&ReleaseRequest::default());

    let expected = format!("stage {}", store.path().display());
    assert!(vcs.calls().contains(&expected));
}
