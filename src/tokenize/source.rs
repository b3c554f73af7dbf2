use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lazy, single-pass supply of text lines.
///
/// Yields lines without their terminator. The first read error is logged
/// and ends the sequence; the source stays exhausted afterwards.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    exhausted: bool,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            exhausted: false,
        }
    }

    /// Number of lines produced so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.exhausted = true;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                self.line_number += 1;
                Some(line)
            }
            Err(err) => {
                tracing::warn!(
                    line = self.line_number + 1,
                    error = %err,
                    "line source stopped on read error"
                );
                self.exhausted = true;
                None
            }
        }
    }
}
