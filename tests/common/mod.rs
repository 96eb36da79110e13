use assert_cmd::{Command, cargo::cargo_bin_cmd};
use std::path::Path;
use std::process::Command as StdCommand;

/// Build a `linkver` invocation rooted at `cwd`.
pub fn linkver_cmd(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("linkver");
    cmd.current_dir(cwd);
    cmd
}

/// True when a usable `git` binary is on PATH. Tests that build fixture
/// repositories return early without it.
pub fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run a git subcommand in `dir`, panicking with stderr on failure.
///
/// Identity is pinned so commits and annotated tags work in a bare test
/// environment, and `GIT_INDEX_FILE` is cleared so fixture setup behaves
/// the same when the test suite itself runs from a git hook.
pub fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args([
            "-c",
            "user.name=linkver-tests",
            "-c",
            "user.email=linkver-tests@example.invalid",
            "-c",
            "init.defaultBranch=main",
        ])
        .args(args)
        .current_dir(dir)
        .env_remove("GIT_INDEX_FILE")
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a git checkout at `dir` with one commit, annotated-tagged `tag`.
pub fn init_tagged_repo(dir: &Path, tag: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("index.js"), "module.exports = {}\n").unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["add", "."]);
    git(dir, &["commit", "-q", "-m", "initial"]);
    git(dir, &["tag", "-a", tag, "-m", tag]);
}

/// Write a `package.json` at `root` with the given declaration groups.
pub fn write_manifest(root: &Path, deps: &[(&str, &str)], dev_deps: &[(&str, &str)]) {
    let to_obj = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect::<serde_json::Map<String, serde_json::Value>>()
    };
    let manifest = serde_json::json!({
        "name": "fixture-project",
        "version": "0.0.0",
        "dependencies": to_obj(deps),
        "devDependencies": to_obj(dev_deps),
    });
    std::fs::write(
        root.join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

/// Symlink `node_modules/<name>` in the fixture project at the checkout
/// living at `target`.
#[cfg(unix)]
pub fn link_dep(root: &Path, name: &str, target: &Path) {
    let modules = root.join("node_modules");
    std::fs::create_dir_all(&modules).unwrap();
    std::os::unix::fs::symlink(target, modules.join(name)).unwrap();
}
