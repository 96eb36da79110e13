use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::paths::Paths;

/// Represents a single linked dependency to verify.
///
/// Each job pairs one manifest declaration with the on-disk location of the
/// symlinked checkout under the dependency directory.
#[derive(Debug, Clone)]
pub struct CheckJob {
    pub name: String,
    pub source: String,
    pub dir: PathBuf,
}

/// Build check jobs from the scanned symlinks and the merged declarations.
///
/// Only names present in both sets produce a job: a symlink nobody declared
/// is ignored, and a declared dependency that is installed normally (not
/// linked) is never queried. Scan order is preserved so the report order is
/// stable.
///
/// # Arguments
/// - `symlinks`: Symlinked entry names from the dependency directory scan.
/// - `deps`: Merged declaration map (name → source reference).
/// - `p`: Paths struct locating the dependency directory.
pub fn build_jobs(
    symlinks: &[String],
    deps: &BTreeMap<String, String>,
    p: &Paths,
) -> Vec<CheckJob> {
    symlinks
        .iter()
        .filter_map(|name| {
            deps.get(name).map(|source| CheckJob {
                name: name.clone(),
                source: source.clone(),
                dir: p.modules.join(name),
            })
        })
        .collect()
}
