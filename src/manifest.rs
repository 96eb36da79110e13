use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Dependency declarations loaded from `package.json`.
///
/// Only the two declaration groups are consumed; every other manifest key
/// is ignored. Each value is a source reference string whose URL fragment
/// encodes the declared version specifier.
///
/// Example JSON:
/// ```json
/// {
///   "dependencies": {
///     "widget-lib": "git+ssh://git@host/team/widget-lib.git#semver:^1.2.0"
///   },
///   "devDependencies": {
///     "test-harness": "git+ssh://git@host/team/test-harness.git#semver:~2.0.1"
///   }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Load and parse `package.json` into a [`Manifest`] structure.
///
/// Declaration groups that are absent from the file deserialize as empty
/// maps; they are not an error.
///
/// # Errors
/// - Returns an error if the manifest cannot be read.
/// - Returns an error if the contents are not valid JSON.
///
/// # Notes
/// - Error messages include the resolved path so a failing hook run points
///   at the right file.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("manifest not found: {}", path.display()))?;
    let manifest: Manifest =
        serde_json::from_str(&txt).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(manifest)
}

/// Merge two declaration groups into a single mapping.
///
/// Returns a new map; neither argument is modified. `overlay` wins on key
/// collision, matching the right-to-left precedence of spreading
/// `dependencies` then `devDependencies`.
pub fn merge_dependency_groups(
    base: &BTreeMap<String, String>,
    overlay: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = base.clone();
    for (name, source) in overlay {
        merged.insert(name.clone(), source.clone());
    }
    merged
}
