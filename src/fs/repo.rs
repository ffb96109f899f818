use std::path::{Path, PathBuf};

use crate::fs::object::ObjectStore;
use crate::{Constants, Error, Result};

/// A work tree together with the repository folder inside it.
///
/// Every operation receives the work tree through this value, nothing reads the process' current
/// directory after start up.
#[derive(Debug, Clone)]
pub struct Repository {
    work_tree: PathBuf,
    store: ObjectStore,
}

impl Repository {
    /// Returns true if `work_tree` holds a repository folder with an objects folder inside.
    pub fn exists(work_tree: &Path) -> bool {
        Constants::objects_path(work_tree).is_dir()
    }

    /// Opens the repository inside `work_tree`.
    ///
    /// # Errors
    ///
    /// Fails with `Error::NotARepository` if `init` was never run there.
    pub fn open(work_tree: &Path) -> Result<Self> {
        if !Repository::exists(work_tree) {
            return Err(Error::NotARepository(work_tree.to_path_buf()));
        }
        Ok(Self {
            work_tree: work_tree.to_path_buf(),
            store: ObjectStore::new(Constants::objects_path(work_tree)),
        })
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }
}
