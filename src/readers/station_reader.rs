use crate::error::{ProcessingError, Result};
use crate::models::StationRecord;
use crate::readers::station_parser::{line_length, parse_record, strip_line_terminator};
use crate::utils::progress::ProgressReporter;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// A line that was left out of the output because of its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub length: usize,
}

/// Stations in input order plus the lines that were skipped along the way.
#[derive(Debug, Default)]
pub struct StationReport {
    pub stations: Vec<StationRecord>,
    pub skipped: Vec<SkippedLine>,
    /// Line numbers that held invalid UTF-8 and were decoded lossily.
    pub lossy_lines: Vec<usize>,
}

impl StationReport {
    pub fn summary(&self) -> String {
        format!(
            "{} stations read, {} malformed lines skipped",
            self.stations.len(),
            self.skipped.len()
        )
    }
}

pub struct StationReader {
    skip_malformed: bool,
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

impl StationReader {
    pub fn new() -> Self {
        Self {
            skip_malformed: true,
        }
    }

    /// When false, a line of the wrong length aborts the read instead of
    /// being reported and skipped.
    pub fn with_skip_malformed(skip_malformed: bool) -> Self {
        Self { skip_malformed }
    }

    /// Read station metadata from a ghcnd-stations.txt file
    pub fn read_stations(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<StationReport> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file), progress)
    }

    /// Read station metadata from any line-oriented source.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and reported, so a
    /// stray Latin-1 byte in a name does not stop the conversion.
    pub fn read_from<R: BufRead>(
        &self,
        mut reader: R,
        progress: Option<&ProgressReporter>,
    ) -> Result<StationReport> {
        let mut report = StationReport::default();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| ProcessingError::from(e).at_line(line_number + 1))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            if let Some(progress) = progress {
                progress.increment(1);
            }

            let decoded = String::from_utf8_lossy(&buffer);
            if let Cow::Owned(_) = decoded {
                warn!(line_number, "Station line is not valid UTF-8, decoding lossily");
                report.lossy_lines.push(line_number);
            }
            let line = strip_line_terminator(&decoded);

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            match parse_record(line) {
                Ok(station) => report.stations.push(station),
                Err(e) if e.is_malformed_line() && self.skip_malformed => {
                    let length = line_length(line);
                    warn!(line_number, length, "Skipping malformed station line");
                    report.skipped.push(SkippedLine {
                        line_number,
                        length,
                    });
                }
                Err(e) => return Err(e.at_line(line_number)),
            }
        }

        debug!("{}", report.summary());
        Ok(report)
    }
}
