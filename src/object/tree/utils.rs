use std::path::PathBuf;

use crate::Result;
use crate::fs::object::ObjectStore;
use crate::hashing::Hash;

use super::{Mode, TreeEntry, read_tree};

/// Reads the tree with the provided hash and goes trough all its entries, reading every subtree
/// it finds, and returns the blob entries of the whole structure paired with their path relative
/// to the root tree.
///
/// Entries come out in the order a depth-first walk of the stored trees visits them, so the
/// paths are sorted the same way each tree is.
pub fn get_all_tree_entries(
    store: &ObjectStore,
    hash: &Hash,
) -> Result<Vec<(PathBuf, TreeEntry)>> {
    let mut paths = Vec::new();
    collect_subtree(store, hash, PathBuf::new(), &mut paths)?;
    Ok(paths)
}

fn collect_subtree(
    store: &ObjectStore,
    hash: &Hash,
    prefix: PathBuf,
    paths: &mut Vec<(PathBuf, TreeEntry)>,
) -> Result<()> {
    for e in read_tree(store, hash)? {
        let whole_path = prefix.join(&e.name);
        match e.mode {
            Mode::Directory => collect_subtree(store, &e.hash, whole_path, paths)?,
            Mode::File => paths.push((whole_path, e)),
        }
    }
    Ok(())
}
