use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a bump run. Each variant maps to one failure
/// class the CLI reports; there are no retries and no recovery paths.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("invalid version part '{0}' (expected: major | minor | patch)")]
    InvalidPart(String),

    #[error("invalid version format '{found}' in {} (expected MAJOR.MINOR.PATCH)", path.display())]
    Format { path: PathBuf, found: String },

    // Display here is the exact line the CLI prints on a collision.
    #[error("Tag {0} already exists. Aborting.")]
    TagConflict(String),

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("git {args} failed: {detail}")]
    Git { args: String, detail: String },
}

impl BumpError {
    pub fn io(action: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        BumpError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
