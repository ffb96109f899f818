use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::object::blob;

/// Returns the hash of `file` as a blob, storing the blob only if `write` is set.
///
/// Relative paths are taken from the work tree.
pub fn hash_object(repository: &Repository, file: &Path, write: bool) -> Result<String> {
    let path = repository.work_tree().join(file);
    let hash = if write {
        blob::write_blob(repository.store(), &path)
    } else {
        blob::hash_blob(&path)
    }
    .with_context(|| format!("could not hash {:?}", file))?;

    Ok(hash.to_string())
}
