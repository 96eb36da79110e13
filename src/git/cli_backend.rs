use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::Command;

/// Run `git describe --dirty` inside `dir` and return its output.
///
/// The working directory is set to the checkout being examined. Local
/// modifications show up as a `-dirty` suffix, and commits past the nearest
/// tag as a `-<n>-g<hash>` suffix, so drift is visible in the returned tag.
///
/// `GIT_INDEX_FILE` is removed from the child environment on the spawn
/// builder: when this tool runs from a git hook, git exports the absolute
/// index path of the outer repository, which would redirect the inner
/// describe to the wrong repository state. The parent environment is
/// otherwise inherited untouched and nothing process-global is mutated.
///
/// # Errors
/// Returns an error if the command cannot be spawned, or if it exits
/// non-zero (e.g. `dir` is not a git checkout, or no tag is reachable);
/// the child's stderr is included in the message.
pub fn describe_dirty(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["describe", "--dirty"])
        .current_dir(dir)
        .env_remove("GIT_INDEX_FILE")
        .output()
        .with_context(|| format!("failed to run git describe in {}", dir.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "git describe failed in {}: {}",
            dir.display(),
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}
