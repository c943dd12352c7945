//! Standard-library integrations backed by tokio.

/// Tokio file line reader.
mod file_line_reader;
/// Line reader configuration.
mod line_reader_config;
/// Line source constructor.
mod line_source;

pub use file_line_reader::FileLineReader;
pub use line_reader_config::LineReaderConfig;
pub use line_source::open_line_source;
