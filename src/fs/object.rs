use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::hashing::Hash;
use crate::object::{Object, ObjectType};
use crate::utils::zlib;
use crate::{Error, Result};

/// The `objects` folder of a repository: maps every hash to a zlib compressed object file at
/// `objects/{hex[0..2]}/{hex[2..]}`.
///
/// The store only ever adds files. An object that is already present is never rewritten, since by
/// construction its content is the same.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects_path: PathBuf,
}

impl ObjectStore {
    pub fn new(objects_path: impl Into<PathBuf>) -> Self {
        Self {
            objects_path: objects_path.into(),
        }
    }

    #[allow(unused)]
    pub fn objects_path(&self) -> &Path {
        &self.objects_path
    }

    /// Returns the path where the object identified by `hash` lives, whether it exists or not.
    pub fn object_path(&self, hash: &Hash) -> PathBuf {
        let (file_dir, file_name) = hash.dir_and_file_name();
        self.objects_path
            .join(OsStr::new(&file_dir))
            .join(OsStr::new(&file_name))
    }

    #[allow(unused)]
    pub fn contains(&self, hash: &Hash) -> bool {
        self.object_path(hash).is_file()
    }

    /// Writes a compressed version of the object to the objects folder, returning the hash used
    /// to find said object.
    ///
    /// The compressed data is written to a temporary file next to its destination and then moved
    /// into place, so readers never see a partially written object.
    ///
    /// # Errors
    ///
    /// This function can fail if it was not possible to create the folder or write the file.
    pub fn put(&self, kind: ObjectType, data: impl Into<Vec<u8>>) -> Result<Hash> {
        let bytes = Object::new(kind, data).encode();
        let hash = Hash::compute(&bytes);

        let file_path = self.object_path(&hash);
        if file_path.exists() {
            log::info!("object {} already stored, skipping write", hash);
            return Ok(hash);
        }

        let folder_path = file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.objects_path.clone());
        fs::create_dir_all(&folder_path)?;

        let compressed = zlib::compress(&bytes)?;
        let mut temp = NamedTempFile::new_in(&folder_path)?;
        temp.write_all(&compressed)?;
        temp.as_file().sync_all()?;

        match temp.persist_noclobber(&file_path) {
            Ok(_) => log::debug!("wrote {} object {} ({} bytes)", kind, hash, bytes.len()),
            // someone else stored the same content in the meantime
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                log::info!("object {} appeared while writing it, keeping existing file", hash)
            }
            Err(e) => return Err(e.error.into()),
        }

        Ok(hash)
    }

    /// Reads, decompresses and decodes the object identified by `hash`.
    ///
    /// The hash of the decoded bytes is checked against `hash`, so a damaged file is reported
    /// instead of returning different content.
    ///
    /// # Errors
    ///
    /// - `Error::ObjectNotFound` if there is no file for `hash`.
    /// - `Error::CorruptObject` if the file could not be decompressed or decoded, or its content
    ///   does not hash to `hash`.
    pub fn get(&self, hash: &Hash) -> Result<Object> {
        let file_path = self.object_path(hash);
        let data = match fs::read(&file_path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(hash.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let bytes = zlib::decompress(&data).map_err(|e| Error::corrupt(hash, e))?;
        let object = Object::decode(&bytes).map_err(|e| Error::corrupt(hash, e))?;

        let computed = Hash::compute(&bytes);
        if computed != *hash {
            return Err(Error::corrupt(
                hash,
                format!("content hashes to {}", computed),
            ));
        }

        log::debug!("read {} object {} ({} bytes)", object.kind, hash, object.data.len());
        Ok(object)
    }
}
