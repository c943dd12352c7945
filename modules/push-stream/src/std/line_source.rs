extern crate std;

use std::path::Path;

use super::{FileLineReader, LineReaderConfig};
use crate::core::{AsyncSource, StageShared};

/// Opens `path` and wraps it in an asynchronous line source.
///
/// A file that cannot be opened yields a source that is already ended, so composing it simply
/// ends the downstream stage with no items.
pub async fn open_line_source(
  path: impl AsRef<Path>,
  config: LineReaderConfig,
) -> StageShared<AsyncSource<FileLineReader>> {
  StageShared::new(AsyncSource::new(FileLineReader::open(path, config).await))
}
