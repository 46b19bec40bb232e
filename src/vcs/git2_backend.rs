use crate::error::{ReleaseError, Result};
use crate::vcs::Vcs;
use git2::Repository;
use std::path::Path;

/// Wrapper around git2 Repository implementing the [Vcs] trait.
///
/// Provides the repository operations the release pipeline needs: a
/// porcelain-style dirty check, staging, committing, tagging, and pushing.
pub struct Git2Vcs {
    repo: Repository,
}

impl Git2Vcs {
    /// Creates a new Git2Vcs instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    ///
    /// # Returns
    /// * `Ok(Git2Vcs)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        let repo = Repository::discover(".")
            .map_err(|e| ReleaseError::vcs(format!("Not in a git repository: {}", e)))?;
        Ok(Git2Vcs { repo })
    }

    /// Open or discover a git repository at a specific path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Vcs { repo })
    }

    /// Build remote callbacks with SSH credential resolution.
    ///
    /// Tries SSH keys from ~/.ssh/ in order of preference, then the SSH
    /// agent, then default credentials. Also installs a push-update
    /// callback so per-reference push rejections surface as errors.
    fn remote_callbacks(&self) -> git2::RemoteCallbacks<'_> {
        let mut callbacks = git2::RemoteCallbacks::new();

        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                // Try SSH agent as fallback
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                eprintln!(
                    "Warning: Could not update reference {}: {}",
                    refname, status
                );
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}",
                    refname
                )))
            } else {
                Ok(())
            }
        });

        callbacks
    }

    fn push_refspec(&self, remote_name: &str, refspec: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| ReleaseError::vcs(format!("No remote named '{}' found", remote_name)))?;

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(self.remote_callbacks());

        match remote.push(&[refspec], Some(&mut push_options)) {
            Ok(_) => Ok(()),
            Err(e) => {
                // Provide more informative error message
                if e.class() == git2::ErrorClass::Net {
                    Err(ReleaseError::vcs(format!("Network error during push: {}", e)))
                } else if e.class() == git2::ErrorClass::Reference {
                    Err(ReleaseError::vcs(format!(
                        "Reference error during push: {}",
                        e
                    )))
                } else {
                    Err(ReleaseError::vcs(format!(
                        "Failed to push '{}': {}",
                        refspec, e
                    )))
                }
            }
        }
    }
}

impl Vcs for Git2Vcs {
    fn has_uncommitted_changes(&self) -> Result<bool> {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        Ok(!statuses.is_empty())
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(path).map_err(|e| {
                ReleaseError::vcs(format!("Cannot stage '{}': {}", path.display(), e))
            })?;
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.push_refspec(remote, &format!("refs/heads/{}:refs/heads/{}", branch, branch))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| ReleaseError::vcs(format!("Cannot create tag '{}': {}", name, e)))?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.push_refspec(remote, &format!("refs/tags/{}:refs/tags/{}", name, name))
    }
}
