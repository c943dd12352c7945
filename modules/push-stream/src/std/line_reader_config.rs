
/// Configuration for [`FileLineReader`](super::FileLineReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReaderConfig {
  buffer_capacity:      usize,
  trim_carriage_return: bool,
  skip_blank_lines:     bool,
}

impl LineReaderConfig {
  /// Default read buffer capacity in bytes.
  pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

  /// Creates a configuration with defaults.
  #[must_use]
  pub const fn new() -> Self {
    Self { buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY, trim_carriage_return: true, skip_blank_lines: false }
  }

  /// Returns the read buffer capacity.
  #[must_use]
  pub const fn buffer_capacity(&self) -> usize {
    self.buffer_capacity
  }

  /// Returns whether a trailing `\r` is stripped from each line.
  #[must_use]
  pub const fn trim_carriage_return(&self) -> bool {
    self.trim_carriage_return
  }

  /// Returns whether blank lines are skipped.
  #[must_use]
  pub const fn skip_blank_lines(&self) -> bool {
    self.skip_blank_lines
  }

  /// Updates the read buffer capacity.
  #[must_use]
  pub const fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
    self.buffer_capacity = buffer_capacity;
    self
  }

  /// Updates carriage-return trimming.
  #[must_use]
  pub const fn with_trim_carriage_return(mut self, trim_carriage_return: bool) -> Self {
    self.trim_carriage_return = trim_carriage_return;
    self
  }

  /// Updates blank-line skipping.
  #[must_use]
  pub const fn with_skip_blank_lines(mut self, skip_blank_lines: bool) -> Self {
    self.skip_blank_lines = skip_blank_lines;
    self
  }
}

impl Default for LineReaderConfig {
  fn default() -> Self {
    Self::new()
  }
}
