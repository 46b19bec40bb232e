use crate::error::{ReleaseError, Result};
use crate::version::Version;
use regex::Regex;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Store for the project's version token.
///
/// `read` yields the current version string from the project metadata;
/// `write` persists a new version into the version file. `path` is the file
/// a release commit stages after a write.
pub trait VersionStore {
    /// Read the current version token
    fn read(&self) -> Result<String>;

    /// Persist a new version
    fn write(&self, version: &Version) -> Result<()>;

    /// Path of the file that `write` modifies, relative to the repository root
    fn path(&self) -> &Path;
}

/// File-backed version store.
///
/// Reads the current version from a metadata file line matching
/// `version = "X.Y.Z"` and writes the new version by rewriting the
/// `__version__ = "..."` assignment line in the version file. All other
/// content of the version file is preserved byte-for-byte.
pub struct FileVersionStore {
    metadata: PathBuf,
    version_file: PathBuf,
}

impl FileVersionStore {
    /// Create a store over the given metadata (read) and version (write) files
    pub fn new(metadata: impl Into<PathBuf>, version_file: impl Into<PathBuf>) -> Self {
        FileVersionStore {
            metadata: metadata.into(),
            version_file: version_file.into(),
        }
    }
}

impl VersionStore for FileVersionStore {
    fn read(&self) -> Result<String> {
        let content = fs::read_to_string(&self.metadata)?;

        let re = Regex::new(r#"version = "([0-9.]+)""#)
            .map_err(|e| ReleaseError::version(format!("Invalid version pattern: {}", e)))?;

        let captures = re.captures(&content).ok_or_else(|| {
            ReleaseError::version(format!(
                "Could not find version in {}",
                self.metadata.display()
            ))
        })?;

        Ok(captures[1].to_string())
    }

    fn write(&self, version: &Version) -> Result<()> {
        let content = fs::read_to_string(&self.version_file)?;

        let re = Regex::new(r"(?m)^__version__ = .+$")
            .map_err(|e| ReleaseError::version(format!("Invalid version pattern: {}", e)))?;

        if !re.is_match(&content) {
            return Err(ReleaseError::version(format!(
                "No __version__ assignment found in {}",
                self.version_file.display()
            )));
        }

        let updated = re.replace(&content, format!("__version__ = \"{}\"", version).as_str());
        fs::write(&self.version_file, updated.as_bytes())?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.version_file
    }
}

/// In-memory version store for tests and dry experimentation.
///
/// Holds a fixed current-version token and records the last written version
/// instead of touching any file.
pub struct MemoryVersionStore {
    current: String,
    written: RefCell<Option<Version>>,
    fail_write: bool,
    path: PathBuf,
}

impl MemoryVersionStore {
    /// Create a store whose `read` returns the given token
    pub fn new(current: impl Into<String>) -> Self {
        MemoryVersionStore {
            current: current.into(),
            written: RefCell::new(None),
            fail_write: false,
            path: PathBuf::from("src/__about__.py"),
        }
    }

    /// Make every `write` call fail
    pub fn with_failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    /// The last version written, if any
    pub fn written(&self) -> Option<Version> {
        *self.written.borrow()
    }
}

impl VersionStore for MemoryVersionStore {
    fn read(&self) -> Result<String> {
        Ok(self.current.clone())
    }

    fn write(&self, version: &Version) -> Result<()> {
        if self.fail_write {
            return Err(ReleaseError::vcs("simulated version write failure"));
        }
        *self.written.borrow_mut() = Some(*version);
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
