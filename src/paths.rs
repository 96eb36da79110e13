use std::path::{Path, PathBuf};

/// Well-known locations inside the project being checked.
#[derive(Clone)]
pub struct Paths {
    pub modules: PathBuf,
    pub manifest: PathBuf,
}

/// Resolve the dependency directory and manifest under `root`.
///
/// The layout is fixed: dependencies live in `<root>/node_modules` and
/// declarations in `<root>/package.json`. The CLI passes the current
/// directory; tests pass explicit roots.
pub fn project_paths(root: &Path) -> Paths {
    Paths {
        modules: root.join("node_modules"),
        manifest: root.join("package.json"),
    }
}
