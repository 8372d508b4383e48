use crate::error::BumpError;
use crate::git::TagStore;
use crate::utils::semver::{Part, Version};
use std::fs;
use std::path::Path;

/// Runs the full bump pipeline: read the version file, validate, increment,
/// guard against an existing tag, rewrite the file, then stage, commit and
/// create one annotated tag. Returns the new version.
///
/// The tag check happens before any mutation, so a conflict leaves both the
/// file and the repository untouched. If a git step fails after the file
/// was rewritten, the file stays mutated; there is no rollback.
pub fn bump_and_tag(
    store: &dyn TagStore,
    version_file: &Path,
    part: Part,
) -> Result<Version, BumpError> {
    let raw = fs::read_to_string(version_file)
        .map_err(|e| BumpError::io("read", version_file, e))?;
    let trimmed = raw.trim();
    let current: Version = trimmed.parse().map_err(|_| BumpError::Format {
        path: version_file.to_path_buf(),
        found: trimmed.to_string(),
    })?;

    let next = current.bump(part);
    let tag = next.tag_name();

    if store.list_tags()?.contains(&tag) {
        return Err(BumpError::TagConflict(tag));
    }

    // No trailing newline; the file holds exactly the triple.
    fs::write(version_file, next.to_string())
        .map_err(|e| BumpError::io("write", version_file, e))?;

    store.stage(version_file)?;
    store.commit(&format!("Bump version to {}", next))?;
    store.tag(&tag, &format!("Release {}", next))?;

    Ok(next)
}
