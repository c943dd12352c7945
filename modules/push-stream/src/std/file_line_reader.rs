//! Line-oriented file resource backed by tokio.

extern crate std;


use alloc::{boxed::Box, format, string::String};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{
  fs::File,
  io::{AsyncBufReadExt, BufReader},
};
use tracing::debug;

use super::LineReaderConfig;
use crate::core::{ReadOutcome, ReadableResource, StreamError, TRACE_TARGET};

/// Readable resource yielding the lines of a file, without their line terminators.
#[derive(Debug)]
pub struct FileLineReader {
  path:   PathBuf,
  reader: BufReader<File>,
  config: LineReaderConfig,
}

impl FileLineReader {
  /// Opens `path` for line reading.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::ResourceUnavailable`] when the file cannot be opened.
  pub async fn open(path: impl AsRef<Path>, config: LineReaderConfig) -> Result<Self, StreamError> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path)
      .await
      .map_err(|error| StreamError::ResourceUnavailable(format!("{}: {error}", path.display())))?;
    debug!(target: TRACE_TARGET, path = %path.display(), "line reader opened");
    Ok(Self { reader: BufReader::with_capacity(config.buffer_capacity(), file), path, config })
  }

  /// Returns the path being read.
  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Returns the reader configuration.
  #[must_use]
  pub const fn config(&self) -> LineReaderConfig {
    self.config
  }

  fn strip_terminator(&self, line: &mut String) {
    if line.ends_with('\n') {
      line.pop();
      if self.config.trim_carriage_return() && line.ends_with('\r') {
        line.pop();
      }
    }
  }
}

#[async_trait(?Send)]
impl ReadableResource for FileLineReader {
  type Item = String;

  async fn read_next(&mut self) -> Result<ReadOutcome<String>, StreamError> {
    loop {
      let mut line = String::new();
      let read = self
        .reader
        .read_line(&mut line)
        .await
        .map_err(|error| StreamError::ReadFailed(format!("{}: {error}", self.path.display())))?;
      if read == 0 {
        return Ok(ReadOutcome::EndOfData);
      }
      self.strip_terminator(&mut line);
      if self.config.skip_blank_lines() && line.trim().is_empty() {
        continue;
      }
      return Ok(ReadOutcome::Item(line));
    }
  }

  fn release(self) {
    debug!(target: TRACE_TARGET, path = %self.path.display(), "line reader released");
  }
}
