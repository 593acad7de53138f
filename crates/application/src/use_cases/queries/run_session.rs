use super::process_query::ProcessQueryUseCase;
use ferrous_lookup_domain::DomainError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const INTERACTIVE_BANNER: &str = "Interactive resolution mode. Enter an empty line to exit.";
pub const PROMPT: &str = "> ";
pub const EXIT_MESSAGE: &str = "Exited.";

/// Counters for one interactive or batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines: u64,
    pub queries: u64,
    pub resolved: u64,
    pub not_found: u64,
}

/// Drives the query processor line by line, from a terminal or a file.
pub struct RunSessionUseCase {
    processor: Arc<ProcessQueryUseCase>,
}

impl RunSessionUseCase {
    pub fn new(processor: Arc<ProcessQueryUseCase>) -> Self {
        Self { processor }
    }

    /// Prompts for lines until an empty line or end of input.
    pub fn interactive<R: BufRead>(
        &self,
        mut input: R,
        out: &mut dyn Write,
    ) -> Result<SessionSummary, DomainError> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        writeln!(out, "{}", INTERACTIVE_BANNER)?;
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim_end_matches(['\r', '\n']).is_empty() {
                break;
            }
            self.process(&line, out, &mut summary)?;
        }
        writeln!(out, "{}", EXIT_MESSAGE)?;

        info!(?summary, "Interactive session finished");
        Ok(summary)
    }

    /// Processes every line of the file at `path`.
    ///
    /// An unopenable file is an `InputUnreadable` error and no query is attempted.
    pub fn batch(&self, path: &Path, out: &mut dyn Write) -> Result<SessionSummary, DomainError> {
        let file = File::open(path).map_err(|e| DomainError::InputUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), "Running batch file");
        self.batch_from_reader(BufReader::new(file), out)
    }

    pub fn batch_from_reader<R: BufRead>(
        &self,
        mut input: R,
        out: &mut dyn Write,
    ) -> Result<SessionSummary, DomainError> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes only spoil their own token.
            self.process(&String::from_utf8_lossy(&buf), out, &mut summary)?;
        }

        info!(?summary, "Batch finished");
        Ok(summary)
    }

    fn process(
        &self,
        line: &str,
        out: &mut dyn Write,
        summary: &mut SessionSummary,
    ) -> Result<(), DomainError> {
        summary.lines += 1;
        for report in self.processor.process_line(line, out)? {
            summary.queries += 1;
            if report.outcome.is_found() {
                summary.resolved += 1;
            } else {
                summary.not_found += 1;
            }
        }
        Ok(())
    }
}
