use std::fmt::Display;
use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::Error;

pub const HASH_BYTE_LEN: usize = 20;
pub const HASH_HEX_LEN: usize = HASH_BYTE_LEN * 2;

/// A SHA-1 digest identifying an object. Its hex form doubles as the object's storage address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; HASH_BYTE_LEN]);

impl Hash {
    /// Returns the SHA-1 digest of `data`.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        let mut bytes = [0; HASH_BYTE_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    /// Splits the hex form into the fan-out directory name and the file name inside it.
    pub fn dir_and_file_name(&self) -> (String, String) {
        let mut hex = self.to_string();
        let file_name = hex.split_off(2);
        (hex, file_name)
    }
}

impl From<[u8; HASH_BYTE_LEN]> for Hash {
    fn from(value: [u8; HASH_BYTE_LEN]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = Error;

    /// Parses a 40 character hex string, upper or lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_HEX_LEN {
            return Err(Error::InvalidHash(s.into()));
        }
        let mut bytes = [0; HASH_BYTE_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidHash(s.into()))?;
        Ok(Self(bytes))
    }
}

// Tests
