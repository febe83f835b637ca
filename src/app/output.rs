//! JSON-lines output.

use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::check::DomainReport;

/// Writer wrapper that ignores broken pipe errors.
///
/// When output is piped to a command that exits early (e.g. `head`), writes
/// fail with `BrokenPipe`; that is treated as success so the run can finish.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes one `DomainReport` per line.
pub struct ReportWriter {
    out: Box<dyn Write + Send>,
    written: usize,
}

impl ReportWriter {
    /// Writes to `path`, or to stdout when `path` is `None` or `-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let out: Box<dyn Write + Send> = match path {
            Some(path) if path.as_os_str() != "-" => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                Box::new(io::BufWriter::new(file))
            }
            _ => Box::new(IgnoreBrokenPipe::new(io::stdout())),
        };
        Ok(Self::new(out))
    }

    /// Writes to an arbitrary sink.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out, written: 0 }
    }

    /// Appends `report` as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_report(&mut self, report: &DomainReport) -> Result<()> {
        serde_json::to_writer(&mut self.out, report)
            .with_context(|| format!("Failed to write report for {}", report.domain))?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn finish(mut self) -> Result<usize> {
        self.out.flush().context("Failed to flush output")?;
        Ok(self.written)
    }
}
