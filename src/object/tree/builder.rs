use std::fs;
use std::path::Path;

use crate::Constants;
use crate::fs::object::ObjectStore;
use crate::hashing::Hash;
use crate::object::{Object, ObjectType, blob};
use crate::{Error, Result};

use super::{Mode, TreeEntry, as_payload};

/// Collects the entries of a single tree, in any order, and turns them into a tree object.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    entries: Vec<TreeEntry>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, mode: Mode, name: String, hash: Hash) {
        self.entries.push(TreeEntry { mode, name, hash });
    }

    /// Consumes the builder, returning a tree object whose entries are sorted by name, comparing
    /// the names byte by byte.
    pub fn build(mut self) -> Object {
        self.entries
            .sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Object::new(ObjectType::Tree, as_payload(&self.entries))
    }
}

/// Stores every file under `dir` as a blob and every directory as a tree, returning the hash of
/// the tree for `dir` itself.
///
/// Children are written before their parents, and a tree is only written once all its entries
/// are known. The repository folder is skipped wherever it appears.
///
/// # Errors
///
/// - `Error::FileUnreadable` if a directory or file could not be read.
/// - `Error::UnsupportedEntry` for symbolic links, special files and names that are not utf-8.
///   Links are never followed.
pub fn write_tree(store: &ObjectStore, dir: &Path) -> Result<Hash> {
    let unreadable = |source: std::io::Error| Error::FileUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut builder = TreeBuilder::new();
    for direntry in fs::read_dir(dir).map_err(unreadable)? {
        let direntry = direntry.map_err(unreadable)?;
        let path = direntry.path();

        let name = direntry.file_name();
        if name == Constants::REPOSITORY_FOLDER_NAME {
            log::debug!("skipping repository folder {:?}", path);
            continue;
        }
        let name = name
            .into_string()
            .map_err(|_| Error::UnsupportedEntry(path.clone()))?;

        // file_type does not traverse symbolic links
        let file_type = direntry
            .file_type()
            .map_err(|source| Error::FileUnreadable {
                path: path.clone(),
                source,
            })?;

        if file_type.is_dir() {
            let hash = write_tree(store, &path)?;
            builder.add_entry(Mode::Directory, name, hash);
        } else if file_type.is_file() {
            let hash = blob::write_blob(store, &path)?;
            builder.add_entry(Mode::File, name, hash);
        } else {
            return Err(Error::UnsupportedEntry(path));
        }
    }

    let tree = builder.build();
    store.put(tree.kind, tree.data)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::object::blob::read_blob;
    use crate::object::tree::read_tree;

    fn setup() -> (TempDir, ObjectStore) {
        let dir = TempDir::new().unwrap();
        let store = ObjectStore::new(Constants::objects_path(dir.path()));
        (dir, store)
    }

    fn names(entries: &[TreeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn hash_of(hex: &str) -> Hash {
        hex.parse().unwrap()
    }

    #[test]
    fn test_builder_sorts_bytewise() {
        let hash = hash_of("99ad2293829e9638b4dfeeb7bc405a4d140e84e3");
        let mut builder = TreeBuilder::new();
        for name in ["b.txt", "a.txt", "Z", "a"] {
            builder.add_entry(Mode::File, name.into(), hash.clone());
        }
        let tree = builder.build();

        assert_eq!(ObjectType::Tree, tree.kind);
        let entries = crate::object::tree::from_payload(&tree.data).unwrap();
        assert_eq!(vec!["Z", "a", "a.txt", "b.txt"], names(&entries));
    }

    #[test]
    fn test_builder_empty() {
        let tree = TreeBuilder::new().build();
        assert!(tree.data.is_empty());
        assert_eq!("tree 0\0".as_bytes(), tree.encode().as_slice());
    }

    #[test]
    fn test_write_tree_sorted_entries() {
        let (dir, store) = setup();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        for name in ["b.txt", "a.txt", "Z"] {
            fs::write(root.join(name), name).unwrap();
        }

        let hash = write_tree(&store, &root).unwrap();
        let entries = read_tree(&store, &hash).unwrap();
        assert_eq!(vec!["Z", "a.txt", "b.txt"], names(&entries));
        assert!(entries.iter().all(|e| e.mode == Mode::File));
    }

    #[test]
    fn test_write_tree_is_deterministic() {
        let (dir, store) = setup();
        let first = dir.path().join("first");
        let second = dir.path().join("second").join("nested");
        for root in [&first, &second] {
            fs::create_dir_all(root.join("sub")).unwrap();
            fs::write(root.join("x"), "hi").unwrap();
            fs::write(root.join("sub").join("y"), "there").unwrap();
        }

        let hash = write_tree(&store, &first).unwrap();
        assert_eq!(hash, write_tree(&store, &first).unwrap());
        // the location of the directory plays no part in its hash
        assert_eq!(hash, write_tree(&store, &second).unwrap());
    }

    #[test]
    fn test_write_tree_child_is_blob_hash() {
        let (dir, store) = setup();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("x"), "hi").unwrap();

        let hash = write_tree(&store, &root).unwrap();
        let entries = read_tree(&store, &hash).unwrap();

        assert_eq!(1, entries.len());
        assert_eq!(Mode::File, entries[0].mode);
        assert_eq!("x", entries[0].name);
        assert_eq!(Object::new(ObjectType::Blob, "hi").hash(), entries[0].hash);
        assert_eq!(b"hi".to_vec(), read_blob(&store, &entries[0].hash).unwrap());
    }

    #[test]
    fn test_write_tree_empty_directory() {
        let (dir, store) = setup();
        let root = dir.path().join("empty");
        fs::create_dir(&root).unwrap();

        let hash = write_tree(&store, &root).unwrap();
        // the empty tree every git installation agrees on
        assert_eq!("4b825dc642cb6eb9a060e54bf8d69288fbee4904", hash.to_string());
        assert!(read_tree(&store, &hash).unwrap().is_empty());
    }

    #[test]
    fn test_write_tree_nested_structure() {
        let (dir, store) = setup();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a").join("f"), "x").unwrap();
        fs::write(root.join("g"), "y").unwrap();

        let hash = write_tree(&store, &root).unwrap();
        let entries = read_tree(&store, &hash).unwrap();
        assert_eq!(vec!["a", "g"], names(&entries));
        assert_eq!(Mode::Directory, entries[0].mode);
        assert_eq!(Mode::File, entries[1].mode);
        assert_eq!(b"y".to_vec(), read_blob(&store, &entries[1].hash).unwrap());

        let subentries = read_tree(&store, &entries[0].hash).unwrap();
        assert_eq!(vec!["f"], names(&subentries));
        assert_eq!(b"x".to_vec(), read_blob(&store, &subentries[0].hash).unwrap());
    }

    #[test]
    fn test_write_tree_skips_repository_folder() {
        let (dir, store) = setup();
        fs::create_dir_all(store.objects_path()).unwrap();
        fs::write(dir.path().join("file"), "content").unwrap();

        let hash = write_tree(&store, dir.path()).unwrap();
        assert_eq!(vec!["file"], names(&read_tree(&store, &hash).unwrap()));
    }

    #[test]
    fn test_write_tree_missing_directory() {
        let (dir, store) = setup();
        assert!(matches!(
            write_tree(&store, &dir.path().join("missing")),
            Err(Error::FileUnreadable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_tree_rejects_symlinks() {
        let (dir, store) = setup();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        // a link back to its own parent would recurse forever if followed
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        match write_tree(&store, &root) {
            Err(Error::UnsupportedEntry(path)) => assert_eq!(root.join("loop"), path),
            other => panic!("expected unsupported entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_tree_wrong_kind() {
        let (dir, store) = setup();
        let path = dir.path().join("file");
        fs::write(&path, "content").unwrap();
        let hash = blob::write_blob(&store, &path).unwrap();

        assert!(matches!(
            read_tree(&store, &hash),
            Err(Error::WrongKind {
                expected: ObjectType::Tree,
                found: ObjectType::Blob
            })
        ));
    }

    #[test]
    fn test_read_tree_truncated() {
        let (dir, store) = setup();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("x"), "hi").unwrap();
        let hash = write_tree(&store, &root).unwrap();

        let object_path = store.object_path(&hash);
        let raw = fs::read(&object_path).unwrap();
        fs::write(&object_path, &raw[..raw.len() / 2]).unwrap();

        assert!(matches!(
            read_tree(&store, &hash),
            Err(Error::CorruptObject { .. })
        ));
    }
}
