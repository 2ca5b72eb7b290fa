use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{DecodeError, Result};

const CHUNK: usize = 64 * 1024;

/// Inflates a zlib-wrapped deflate stream.
///
/// Unlike `flate2::read::ZlibDecoder`, a stream that ends before its final
/// block is reported as an error instead of a short read.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut inflated =
        Vec::with_capacity(compressed.len().saturating_mul(4).clamp(CHUNK, 16 * CHUNK));

    loop {
        if inflated.len() == inflated.capacity() {
            inflated.reserve(CHUNK);
        }
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&compressed[consumed..], &mut inflated, FlushDecompress::None)
            .map_err(|e| DecodeError::Decompress(e.to_string()))?;

        match status {
            Status::StreamEnd => return Ok(inflated),
            _ if inflater.total_in() as usize == consumed && inflater.total_out() == produced => {
                return Err(DecodeError::Decompress(format!(
                    "stream ended early after {consumed} of {} input bytes",
                    compressed.len()
                )));
            }
            _ => {}
        }
    }
}
