use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

/// Compresses `bytes` using a zlib encoder.
///
/// # Errors
///
/// This function will fail if the `ZlibEncoder` fails.
pub fn compress(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Returns `bytes` decompressed, using a zlib decoder.
///
/// The stream has to be complete: running out of input before the zlib end marker (and its
/// checksum) is reported as an error, so a truncated file never decodes into a shorter payload.
///
/// # Errors
///
/// Fails with `io::ErrorKind::InvalidData` if the stream is invalid or incomplete.
pub fn decompress(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = Decompress::new(true);
    let mut buf = Vec::with_capacity(bytes.len().saturating_mul(2).max(64));

    loop {
        if buf.len() == buf.capacity() {
            buf.reserve(buf.capacity());
        }

        let (in_before, out_before) = (decoder.total_in(), decoder.total_out());
        let consumed = in_before as usize;
        let status = decoder
            .decompress_vec(&bytes[consumed..], &mut buf, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if status == Status::StreamEnd {
            return Ok(buf);
        }

        let stalled = decoder.total_in() == in_before && decoder.total_out() == out_before;
        let input_exhausted = decoder.total_in() as usize == bytes.len();
        if buf.len() < buf.capacity() && (stalled || input_exhausted) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "zlib stream ended unexpectedly",
            ));
        }
    }
}
