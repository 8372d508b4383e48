use crate::error::BumpError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The version-control operations a bump run needs. Kept as a trait so the
/// orchestration can be driven against a fake store in tests instead of a
/// real repository.
pub trait TagStore {
    /// All tag names currently present in the repository.
    fn list_tags(&self) -> Result<BTreeSet<String>, BumpError>;

    /// Stage a single file.
    fn stage(&self, path: &Path) -> Result<(), BumpError>;

    /// Commit the staged changes with the given message.
    fn commit(&self, message: &str) -> Result<(), BumpError>;

    /// Create an annotated tag with the given message.
    fn tag(&self, name: &str, message: &str) -> Result<(), BumpError>;
}

/// `TagStore` backed by the `git` command-line tool. Every call is a
/// blocking child-process invocation run to completion; git's internal
/// state is opaque to this type.
pub struct GitTagStore {
    repo_dir: PathBuf,
}

impl GitTagStore {
    /// Binds the store to a repository directory. Fails up front when no
    /// `git` binary is reachable, rather than on the first invocation.
    pub fn new(repo_dir: &Path) -> Result<Self, BumpError> {
        which::which("git").map_err(|e| BumpError::Git {
            args: "--version".to_string(),
            detail: format!("git not found in PATH: {}", e),
        })?;
        Ok(GitTagStore {
            repo_dir: repo_dir.to_path_buf(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<String, BumpError> {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.repo_dir);
        for arg in args {
            cmd.arg(arg);
        }
        let joined = args.join(" ");
        let output = cmd.output().map_err(|e| BumpError::Git {
            args: joined.clone(),
            detail: format!("failed to spawn: {}", e),
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::Git {
                args: joined,
                detail: match stderr.trim() {
                    "" => format!("exit={}", output.status),
                    msg => msg.to_string(),
                },
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TagStore for GitTagStore {
    fn list_tags(&self) -> Result<BTreeSet<String>, BumpError> {
        let stdout = self.run(&["tag"])?;
        Ok(stdout.lines().map(|l| l.to_string()).collect())
    }

    fn stage(&self, path: &Path) -> Result<(), BumpError> {
        self.run(&["add", &path.to_string_lossy()])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), BumpError> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn tag(&self, name: &str, message: &str) -> Result<(), BumpError> {
        self.run(&["tag", "-a", name, "-m", message])?;
        Ok(())
    }
}
