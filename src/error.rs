use std::path::PathBuf;

use crate::hashing::Hash;
use crate::object::ObjectType;

/// Enum intended to represent all the different error types the object store can report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no object found for {0}")]
    ObjectNotFound(Hash),
    #[error("object {hash} is corrupt: {reason}")]
    CorruptObject { hash: Hash, reason: String },
    #[error("object is malformed: {0}")]
    MalformedObject(String),
    #[error("expected a {expected} object, got a {found}")]
    WrongKind {
        expected: ObjectType,
        found: ObjectType,
    },
    #[error("{0:?} is neither a regular file nor a directory")]
    UnsupportedEntry(PathBuf),
    #[error("{0:?} is not a valid object hash")]
    InvalidHash(String),
    #[error("{0:?} is not a repository")]
    NotARepository(PathBuf),
    #[error("i/o operation error: {0:?}")]
    IO(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedObject(reason.into())
    }

    pub(crate) fn corrupt(hash: &Hash, reason: impl ToString) -> Self {
        Error::CorruptObject {
            hash: hash.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Abstraction of the result type where the error is always an Error from this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
