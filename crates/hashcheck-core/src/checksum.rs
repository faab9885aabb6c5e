//! Streaming CRC32 (IEEE) of file contents.
//!
//! Files are read in fixed-size chunks so memory use stays bounded no matter
//! how large the file is. The handle is dropped on every return path.

use crc32fast::Hasher;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

const BUF_SIZE: usize = 8 * 1024;

/// Why a file's checksum could not be computed.
#[derive(Debug, Error)]
pub enum HashError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("open: {0}")]
    Open(#[source] io::Error),
    /// A read failed before end of file.
    #[error("read: {0}")]
    Read(#[source] io::Error),
}

/// Compute the CRC32 of a file by streaming it in chunks.
pub fn crc32_path(path: &Path) -> Result<u32, HashError> {
    let f = File::open(path).map_err(HashError::Open)?;
    crc32_reader(f)
}

/// Compute the CRC32 of everything `reader` yields until end of stream.
/// Interrupted reads are retried; any other read error is reported.
pub fn crc32_reader<R: Read>(mut reader: R) -> Result<u32, HashError> {
    let mut hasher = Hasher::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HashError::Read(e)),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}
