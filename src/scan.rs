use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// List the names of symlinked entries directly under `dir`.
///
/// Link status comes from the entry itself and the link is never followed:
/// a symlink pointing at a missing target still counts as linked, while a
/// regular directory that happens to share a name with a declared
/// dependency never does. There is no recursion into subdirectories.
///
/// The returned names are sorted so downstream report order is stable.
/// Entries with non-UTF-8 names are skipped.
///
/// # Errors
/// Returns an error if `dir` is absent or unreadable. A missing dependency
/// directory means there is nothing meaningful to verify, and the caller
/// treats it as fatal.
pub fn linked_entries(dir: &Path) -> Result<Vec<String>> {
    let rd = fs::read_dir(dir)
        .with_context(|| format!("cannot read dependency directory: {}", dir.display()))?;

    let mut names = Vec::new();
    for ent in rd {
        let ent = ent?;
        // DirEntry::file_type reports the link itself, not its target.
        let ft = ent.file_type()?;
        if !ft.is_symlink() {
            continue;
        }
        if let Some(name) = ent.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_is_an_error() {
        let td = tempdir().unwrap();
        let err = linked_entries(&td.path().join("node_modules")).unwrap_err();
        assert!(err.to_string().contains("cannot read dependency directory"));
    }

    #[test]
    fn regular_entries_are_excluded() {
        let td = tempdir().unwrap();
        let modules = td.path().join("node_modules");
        fs::create_dir_all(modules.join("installed-dep")).unwrap();
        fs::write(modules.join("stray-file"), "").unwrap();

        let got = linked_entries(&modules).unwrap();
        assert!(got.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_listed_sorted() {
        let td = tempdir().unwrap();
        let modules = td.path().join("node_modules");
        fs::create_dir_all(&modules).unwrap();

        let checkout_b = td.path().join("checkouts").join("b-lib");
        let checkout_a = td.path().join("checkouts").join("a-lib");
        fs::create_dir_all(&checkout_b).unwrap();
        fs::create_dir_all(&checkout_a).unwrap();

        unix_fs::symlink(&checkout_b, modules.join("b-lib")).unwrap();
        unix_fs::symlink(&checkout_a, modules.join("a-lib")).unwrap();
        fs::create_dir_all(modules.join("installed-dep")).unwrap();

        let got = linked_entries(&modules).unwrap();
        assert_eq!(got, vec!["a-lib".to_string(), "b-lib".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_still_counts_as_linked() {
        let td = tempdir().unwrap();
        let modules = td.path().join("node_modules");
        fs::create_dir_all(&modules).unwrap();

        unix_fs::symlink(td.path().join("no/such/checkout"), modules.join("gone")).unwrap();

        let got = linked_entries(&modules).unwrap();
        assert_eq!(got, vec!["gone".to_string()]);
    }
}
