//! Version control access for restoring locale directories.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Error from a version control operation.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// The three steps used to bring a deleted path back from the last commit.
pub trait Vcs: Sync {
    /// Drop any staged changes under `path`.
    fn unstage(&self, path: &Path) -> Result<(), VcsError>;

    /// Restore the working tree under `path` from the index.
    fn restore(&self, path: &Path) -> Result<(), VcsError>;

    /// Stage the restored files under `path`.
    fn stage(&self, path: &Path) -> Result<(), VcsError>;
}

/// [`Vcs`] backed by the `git` executable.
#[derive(Clone, Debug)]
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    /// Run git commands inside `repo_dir`.
    #[must_use]
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    fn run(&self, args: &[&OsStr]) -> Result<(), VcsError> {
        let command = describe(args);
        tracing::trace!(%command, dir = %self.repo_dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(VcsError::Failed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            })
        }
    }
}

impl Vcs for GitCli {
    fn unstage(&self, path: &Path) -> Result<(), VcsError> {
        self.run(&[
            OsStr::new("reset"),
            OsStr::new("-q"),
            OsStr::new("--"),
            path.as_os_str(),
        ])
    }

    fn restore(&self, path: &Path) -> Result<(), VcsError> {
        self.run(&[OsStr::new("restore"), OsStr::new("-q"), path.as_os_str()])
    }

    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        self.run(&[OsStr::new("add"), path.as_os_str()])
    }
}

fn describe(args: &[&OsStr]) -> String {
    let mut command = String::from("git");
    for arg in args {
        command.push(' ');
        command.push_str(&arg.to_string_lossy());
    }
    command
}
