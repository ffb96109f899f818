use std::fs;
use std::path::Path;

use crate::fs::object::ObjectStore;
use crate::hashing::Hash;
use crate::{Error, Result};

use super::{Object, ObjectType};

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Stores the content of the file at `path` as a blob object, returning its hash.
///
/// # Errors
///
/// - `Error::FileUnreadable` if the file could not be opened or read.
/// - Any error from `ObjectStore::put`.
pub fn write_blob(store: &ObjectStore, path: &Path) -> Result<Hash> {
    let data = read_file(path)?;
    store.put(ObjectType::Blob, data)
}

/// Returns the hash the file at `path` would have as a blob, without storing anything.
pub fn hash_blob(path: &Path) -> Result<Hash> {
    let data = read_file(path)?;
    Ok(Object::new(ObjectType::Blob, data).hash())
}

/// Returns the content of the blob identified by `hash`.
///
/// # Errors
///
/// Fails with `Error::WrongKind` if `hash` refers to a tree, or with any error from
/// `ObjectStore::get`.
pub fn read_blob(store: &ObjectStore, hash: &Hash) -> Result<Vec<u8>> {
    let object = store.get(hash)?;
    match object.kind {
        ObjectType::Blob => Ok(object.data),
        found => Err(Error::WrongKind {
            expected: ObjectType::Blob,
            found,
        }),
    }
}
