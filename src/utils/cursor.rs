use std::io::{BufRead, Cursor, Read};

use crate::{Error, Result};

pub trait EasyRead {
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>>;
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]>;
    fn is_exhausted(&self) -> bool;
}

impl<T: AsRef<[u8]>> EasyRead for Cursor<T> {
    /// Reads up to and including `byte`, returning what came before it.
    ///
    /// Reaching the end of the data without finding `byte` is reported as a malformed object, so
    /// it can just be handled with the `?` operator.
    fn read_until_checked(&mut self, byte: u8) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        BufRead::read_until(self, byte, &mut buf)?;
        if buf.pop() != Some(byte) {
            return Err(Error::malformed(format!(
                "expected byte {:#04x} before the end of the data",
                byte
            )));
        }
        Ok(buf)
    }

    /// Reads exactly `N` bytes, whatever their value.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0; N];
        self.read_exact(&mut buf).map_err(|_| {
            Error::malformed(format!("expected {} more bytes before the end of the data", N))
        })?;
        Ok(buf)
    }

    fn is_exhausted(&self) -> bool {
        self.position() as usize >= self.get_ref().as_ref().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_checked() {
        let mut cursor = Cursor::new(b"100644 a\0rest".as_slice());
        assert_eq!(b"100644".to_vec(), cursor.read_until_checked(b' ').unwrap());
        assert_eq!(b"a".to_vec(), cursor.read_until_checked(b'\0').unwrap());
        assert!(cursor.read_until_checked(b'\0').is_err());
    }

    #[test]
    fn test_read_array_keeps_null_bytes() {
        let mut cursor = Cursor::new([0u8, 1, 0, 2, 0].as_slice());
        assert_eq!([0, 1, 0], cursor.read_array::<3>().unwrap());
        assert!(!cursor.is_exhausted());
        assert!(cursor.read_array::<3>().is_err());
    }

    #[test]
    fn test_is_exhausted() {
        let mut cursor = Cursor::new(b"ab".as_slice());
        assert!(!cursor.is_exhausted());
        cursor.read_array::<2>().unwrap();
        assert!(cursor.is_exhausted());
    }
}
