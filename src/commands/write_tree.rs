use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::object::tree;

/// Stores the whole work tree and returns the hash of its root tree.
pub fn write_tree(repository: &Repository) -> Result<String> {
    let hash = tree::write_tree(repository.store(), repository.work_tree())
        .with_context(|| format!("could not write tree for {:?}", repository.work_tree()))?;
    Ok(hash.to_string())
}
