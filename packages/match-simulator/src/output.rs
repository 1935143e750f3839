//! JSON-lines output for match summaries.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulator::MatchSummary;

pub struct OutputWriter {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Write to `path`, or to stdout when `None`.
    pub fn new(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(BufWriter::new(io::stdout())),
                path: None,
            });
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            writer: Box::new(BufWriter::new(File::create(path)?)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn write_match(&mut self, summary: &MatchSummary) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(summary)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(self.path)
    }
}
