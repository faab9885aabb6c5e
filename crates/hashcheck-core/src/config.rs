use std::num::NonZeroUsize;

/// Run configuration assembled by the caller (the CLI builds it from flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Number of verification workers.
    pub workers: NonZeroUsize,
    /// Exit with failure when any file is bad or unreadable.
    pub strict: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            strict: false,
        }
    }
}

impl CheckConfig {
    /// Default config with an explicit worker count, if given.
    pub fn with_workers(workers: Option<NonZeroUsize>) -> Self {
        Self {
            workers: workers.unwrap_or_else(default_workers),
            ..Self::default()
        }
    }
}

/// Available parallelism of the host, or 1 when it cannot be determined.
pub fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
