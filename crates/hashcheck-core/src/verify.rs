//! Verify one file: compare the checksum in its name with its contents.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::checksum::{crc32_path, HashError};
use crate::extract::extract_checksum;

/// Report category of an [`Outcome`], in summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Ok,
    Bad,
    Skip,
    Err,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Ok, Category::Bad, Category::Skip, Category::Err];

    /// Lowercase label used in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ok => "ok",
            Category::Bad => "bad",
            Category::Skip => "skip",
            Category::Err => "err",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What verification found for one file.
#[derive(Debug)]
pub enum Status {
    /// Contents match the embedded checksum.
    Ok,
    /// Contents were read but do not match.
    Bad { expected: u32, actual: u32 },
    /// No embedded checksum; the file was not opened.
    Skip,
    /// The file could not be opened or read.
    Err(HashError),
}

/// Verification result for one input path. Produced once, never mutated.
#[derive(Debug)]
pub struct Outcome {
    pub path: PathBuf,
    pub status: Status,
}

impl Outcome {
    pub fn category(&self) -> Category {
        match self.status {
            Status::Ok => Category::Ok,
            Status::Bad { .. } => Category::Bad,
            Status::Skip => Category::Skip,
            Status::Err(_) => Category::Err,
        }
    }
}

/// Verify a single file. Holds no shared state, so it can run on any thread.
pub fn verify(path: &Path) -> Outcome {
    let status = match extract_checksum(path) {
        Err(_) => Status::Skip,
        Ok(expected) => match crc32_path(path) {
            Err(e) => Status::Err(e),
            Ok(actual) if actual == expected => Status::Ok,
            Ok(actual) => Status::Bad { expected, actual },
        },
    };
    match &status {
        Status::Bad { expected, actual } => tracing::debug!(
            path = %path.display(),
            expected = format_args!("{expected:08x}"),
            actual = format_args!("{actual:08x}"),
            "checksum mismatch"
        ),
        Status::Err(e) => tracing::debug!(path = %path.display(), error = %e, "cannot hash"),
        _ => tracing::trace!(path = %path.display(), status = ?status, "verified"),
    }
    Outcome {
        path: path.to_path_buf(),
        status,
    }
}
