//! Extract the CRC32 embedded in a file name.
//!
//! The name is split into maximal runs of ASCII hex digits; every other byte
//! is a separator. The last run that is exactly 8 digits long is the checksum.
//! Longer runs are never sub-sliced, so `0123456789abcdef` does not qualify.

use std::ffi::OsStr;
use thiserror::Error;

/// Number of hex digits in an embedded CRC32.
pub const CHECKSUM_DIGITS: usize = 8;

/// The name contains no run of exactly [`CHECKSUM_DIGITS`] hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no 8-digit hexadecimal checksum in file name")]
pub struct NoChecksumFound;

/// Return the checksum embedded in `name`, taking the rightmost 8-digit run.
///
/// Works on the raw encoded bytes so non-UTF-8 names are scanned too; bytes
/// outside ASCII are never hex digits.
pub fn extract_checksum(name: impl AsRef<OsStr>) -> Result<u32, NoChecksumFound> {
    let bytes = name.as_ref().as_encoded_bytes();
    let run = bytes
        .rsplit(|b| !b.is_ascii_hexdigit())
        .find(|run| run.len() == CHECKSUM_DIGITS)
        .ok_or(NoChecksumFound)?;
    // The run is pure ASCII hex, so both conversions succeed.
    let digits = std::str::from_utf8(run).map_err(|_| NoChecksumFound)?;
    u32::from_str_radix(digits, 16).map_err(|_| NoChecksumFound)
}
