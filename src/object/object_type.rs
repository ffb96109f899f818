use std::fmt::Display;

use crate::{Error, Result};

/// The kinds of object the store knows how to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
}

impl ObjectType {
    pub const BLOB_STRING: &'static str = "blob";
    pub const TREE_STRING: &'static str = "tree";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => ObjectType::BLOB_STRING,
            Self::Tree => ObjectType::TREE_STRING,
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = crate::Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        match value {
            b if b == ObjectType::BLOB_STRING.as_bytes() => Ok(ObjectType::Blob),
            b if b == ObjectType::TREE_STRING.as_bytes() => Ok(ObjectType::Tree),
            _ => Err(Error::malformed(format!(
                "unknown object type {:?}",
                String::from_utf8_lossy(value)
            ))),
        }
    }
}
