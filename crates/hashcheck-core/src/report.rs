//! Per-file report lines and the final summary.

use std::fmt;
use std::io::{self, Write};

use crate::verify::{Category, Outcome, Status};

/// Count of outcomes per category. Owned by the [`Reporter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub bad: usize,
    pub skip: usize,
    pub err: usize,
}

impl Summary {
    pub fn add(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Ok => self.ok,
            Category::Bad => self.bad,
            Category::Skip => self.skip,
            Category::Err => self.err,
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.bad + self.skip + self.err
    }

    /// True when any file failed verification or could not be read.
    pub fn has_failures(&self) -> bool {
        self.bad > 0 || self.err > 0
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Ok => &mut self.ok,
            Category::Bad => &mut self.bad,
            Category::Skip => &mut self.skip,
            Category::Err => &mut self.err,
        }
    }
}

/// Summary line without the newline: `[ok: 1][skip: 1]`, zero counts omitted.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let n = self.count(category);
            if n > 0 {
                write!(f, "[{category}: {n}]")?;
            }
        }
        Ok(())
    }
}

/// Streams one line per outcome to `out` and tallies a [`Summary`].
pub struct Reporter<W: Write> {
    out: W,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: Summary::default(),
        }
    }

    /// Print the line for `outcome` immediately and count it.
    pub fn record(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.summary.add(outcome.category());
        let path = outcome.path.display();
        match &outcome.status {
            Status::Ok => writeln!(self.out, "OK:   {path}"),
            Status::Bad { .. } => writeln!(self.out, "BAD:  {path}"),
            Status::Skip => writeln!(self.out, "SKIP: {path}"),
            Status::Err(e) => writeln!(self.out, "ERR:  {path}: {e}"),
        }
    }

    /// Print the summary line (a bare newline when nothing was counted),
    /// flush, and hand back the counts.
    pub fn finish(mut self) -> io::Result<Summary> {
        writeln!(self.out, "{}", self.summary)?;
        self.out.flush()?;
        Ok(self.summary)
    }
}
