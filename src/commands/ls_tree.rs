use std::str::FromStr;

use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::hashing::Hash;
use crate::object::tree;
use crate::utils::path::format_path;

/// Lists the tree identified by `hash`, one entry per line in stored order.
///
/// With `recursive` every subtree is entered and only files are listed, named by their path
/// relative to the tree.
pub fn ls_tree(
    repository: &Repository,
    hash: &str,
    name_only: bool,
    recursive: bool,
) -> Result<String> {
    let hash = Hash::from_str(hash).context("tree hash was invalid")?;
    let store = repository.store();

    let lines: Vec<String> = if recursive {
        tree::utils::get_all_tree_entries(store, &hash)
            .with_context(|| format!("could not read tree {} recursively", hash))?
            .into_iter()
            .map(|(path, e)| {
                let path = format_path(&path).to_string_lossy().into_owned();
                if name_only {
                    path
                } else {
                    format!("{} {} {}\t{}", e.mode.as_str(), e.mode.object_type(), e.hash, path)
                }
            })
            .collect()
    } else {
        tree::read_tree(store, &hash)
            .with_context(|| format!("could not read tree {}", hash))?
            .into_iter()
            .map(|e| if name_only { e.name } else { e.to_string() })
            .collect()
    };

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::commands::init::init;
    use crate::object::tree::write_tree;

    fn setup() -> (TempDir, Repository, String) {
        let dir = TempDir::new().unwrap();
        init(dir.path()).unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a").join("f"), "x").unwrap();
        fs::write(dir.path().join("g"), "y").unwrap();
        fs::write(dir.path().join("B"), "z").unwrap();

        let repository = Repository::open(dir.path()).unwrap();
        let hash = write_tree(repository.store(), dir.path()).unwrap().to_string();
        (dir, repository, hash)
    }

    #[test]
    fn test_ls_tree_name_only() {
        let (_dir, repository, hash) = setup();
        assert_eq!("B\na\ng", ls_tree(&repository, &hash, true, false).unwrap());
    }

    #[test]
    fn test_ls_tree_recursive() {
        let (_dir, repository, hash) = setup();
        assert_eq!("B\na/f\ng", ls_tree(&repository, &hash, true, true).unwrap());
    }

    #[test]
    fn test_ls_tree_full() {
        let (_dir, repository, hash) = setup();
        let listing = ls_tree(&repository, &hash, false, false).unwrap();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(3, lines.len());
        assert!(lines[0].starts_with("100644 blob "));
        assert!(lines[0].ends_with("\tB"));
        assert!(lines[1].starts_with("040000 tree "));
        assert!(lines[1].ends_with("\ta"));
    }

    #[test]
    fn test_ls_tree_on_blob() {
        let (dir, repository, _) = setup();
        let blob = crate::object::blob::write_blob(repository.store(), &dir.path().join("g"))
            .unwrap()
            .to_string();
        assert!(ls_tree(&repository, &blob, true, false).is_err());
    }
}
