use std::io::Cursor;

use crate::hashing::Hash;
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

use super::{NULL_BYTE, ObjectType, SPACE_BYTE};

/// The unit every stored file holds: a kind tag and the payload bytes. The payload size is never
/// stored separately, it is always taken from `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjectType,
    pub data: Vec<u8>,
}

impl Object {
    pub fn new(kind: ObjectType, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    /// Returns the encoded data for this object, with the following format:
    ///
    /// `{type} {data_length}\0{data}`
    pub fn encode(&self) -> Vec<u8> {
        // Encoding to this format: blob 4\0abcd
        let mut bytes = format!("{} {}\0", self.kind, self.data.len()).into_bytes();
        bytes.extend_from_slice(&self.data);
        bytes
    }

    /// Returns the hash identifying this object, computed over its whole encoded form.
    pub fn hash(&self) -> Hash {
        Hash::compute(&self.encode())
    }

    /// Parses the `{type} {data_length}\0{data}` layout produced by `encode`.
    ///
    /// # Errors
    ///
    /// Fails with `Error::MalformedObject` if:
    /// - There is no null byte ending the header.
    /// - The type is not a known one.
    /// - The length is not a decimal number or does not match the amount of data after the header.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        let header = cursor
            .read_until_checked(NULL_BYTE)
            .map_err(|_| Error::malformed("object header is not terminated by a null byte"))?;

        let space = header
            .iter()
            .position(|b| *b == SPACE_BYTE)
            .ok_or_else(|| Error::malformed("expected space after object type"))?;
        let (kind, size) = (&header[..space], &header[space + 1..]);

        let kind = ObjectType::try_from(kind)?;
        let size = parse_size(size)?;

        let data = &bytes[cursor.position() as usize..];
        if size != data.len() {
            return Err(Error::malformed(format!(
                "declared length {} did not match actual data length {}",
                size,
                data.len()
            )));
        }

        Ok(Self::new(kind, data))
    }
}

fn parse_size(digits: &[u8]) -> Result<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::malformed(format!(
            "object length {:?} is not a decimal number",
            String::from_utf8_lossy(digits)
        )));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(Error::malformed(format!(
            "object length {:?} has a leading zero",
            String::from_utf8_lossy(digits)
        )));
    }
    String::from_utf8_lossy(digits)
        .parse()
        .map_err(|e| Error::malformed(format!("could not read object length: {}", e)))
}
