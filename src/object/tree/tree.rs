use std::fmt::Display;
use std::io::Cursor;

use crate::fs::object::ObjectStore;
use crate::hashing::{HASH_BYTE_LEN, Hash};
use crate::object::{NULL_BYTE, ObjectType, SPACE_BYTE};
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

/// The only two kinds of child a tree can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    File,
    Directory,
}

impl Mode {
    pub const FILE_STRING: &'static str = "100644";
    pub const DIRECTORY_STRING: &'static str = "040000";

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::File => Mode::FILE_STRING,
            Mode::Directory => Mode::DIRECTORY_STRING,
        }
    }

    /// The kind of object an entry with this mode points to.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Mode::File => ObjectType::Blob,
            Mode::Directory => ObjectType::Tree,
        }
    }
}

impl TryFrom<&[u8]> for Mode {
    type Error = crate::Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        match value {
            b if b == Mode::FILE_STRING.as_bytes() => Ok(Mode::File),
            b if b == Mode::DIRECTORY_STRING.as_bytes() => Ok(Mode::Directory),
            _ => Err(Error::malformed(format!(
                "unsupported tree entry mode {:?}",
                String::from_utf8_lossy(value)
            ))),
        }
    }
}

/// Struct that represents a single tree entry in a tree object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: Mode,
    /// A single path segment, never containing a null byte or a forward slash
    pub name: String,
    pub hash: Hash,
}

impl Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}\t{}",
            self.mode.as_str(),
            self.mode.object_type(),
            self.hash,
            self.name
        )
    }
}

/// Encodes tree entries, in the order given, as a tree payload.
///
/// Every entry has this format, with no separator between entries:
///
/// "`{mode} {name}\0{hash}`"
///
/// where the hash is written as its 20 raw bytes.
pub fn as_payload(entries: &[TreeEntry]) -> Vec<u8> {
    let mut payload = Vec::new();
    for e in entries {
        payload.extend(format!("{} {}\0", e.mode.as_str(), e.name).as_bytes());
        payload.extend(e.hash.as_ref());
    }
    payload
}

/// Parses a tree payload back into its entries, keeping the stored order.
///
/// The hash of each entry is read as exactly `HASH_BYTE_LEN` bytes since it can contain any byte,
/// null and space included.
///
/// # Errors
///
/// Fails with `Error::MalformedObject` if an entry is incomplete or its mode or name is invalid.
pub fn from_payload(payload: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut cursor = Cursor::new(payload);
    let mut entries = Vec::new();

    while !cursor.is_exhausted() {
        let mode_and_name = cursor
            .read_until_checked(NULL_BYTE)
            .map_err(|_| Error::malformed("expected null byte after tree entry name"))?;

        let space = mode_and_name
            .iter()
            .position(|b| *b == SPACE_BYTE)
            .ok_or_else(|| Error::malformed("expected space after tree entry mode"))?;

        let mode = Mode::try_from(&mode_and_name[..space])?;
        let name = parse_name(&mode_and_name[space + 1..])?;

        let hash: [u8; HASH_BYTE_LEN] = cursor
            .read_array()
            .map_err(|_| Error::malformed(format!("tree entry {:?} has an incomplete hash", name)))?;

        entries.push(TreeEntry {
            mode,
            name,
            hash: Hash::from(hash),
        });
    }

    Ok(entries)
}

fn parse_name(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::malformed("tree entry has an empty name"));
    }
    let name = String::from_utf8(bytes.to_vec())
        .map_err(|_| Error::malformed("tree entry name is not valid utf-8"))?;
    if name.contains('/') {
        return Err(Error::malformed(format!(
            "tree entry name {:?} contains a forward slash",
            name
        )));
    }
    Ok(name)
}

/// Returns the entries of the tree identified by `hash`, in stored order.
///
/// # Errors
///
/// Fails with `Error::WrongKind` if `hash` refers to a blob, `Error::MalformedObject` if the
/// payload can't be parsed, or any error from `ObjectStore::get`.
pub fn read_tree(store: &ObjectStore, hash: &Hash) -> Result<Vec<TreeEntry>> {
    let object = store.get(hash)?;
    match object.kind {
        ObjectType::Tree => from_payload(&object.data),
        found => Err(Error::WrongKind {
            expected: ObjectType::Tree,
            found,
        }),
    }
}
